//! @acp:module "Document Renderer"
//! @acp:summary "Markdown rendering of the merged documentation model"
//! @acp:domain docs
//! @acp:layer output

use std::collections::HashSet;

use super::merger::DocumentModel;

/// Placeholder used when no description fragment was collected
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Heading of the pitfalls section
pub const PITFALLS_HEADING: &str = "## ⚠️ Common Pitfalls";

/// Description fragments with exact duplicates removed, first occurrence kept
pub fn unique_descriptions(model: &DocumentModel) -> Vec<&str> {
    let mut seen = HashSet::new();
    model
        .description
        .iter()
        .map(String::as_str)
        .filter(|desc| seen.insert(*desc))
        .collect()
}

/// Render the README, or `None` when the model has no title
pub fn render_readme(model: &DocumentModel) -> Option<String> {
    let title = model.title.as_deref()?;
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", title));

    if let Some(chapter) = &model.chapter {
        output.push_str(&format!("**Chapter:** {}\n\n", chapter));
    }

    output.push_str("## Description\n\n");
    let descriptions = unique_descriptions(model);
    if descriptions.is_empty() {
        output.push_str(NO_DESCRIPTION);
        output.push_str("\n\n");
    } else {
        for desc in descriptions {
            output.push_str(desc);
            output.push_str("\n\n");
        }
    }

    // Pitfalls keep duplicates
    if !model.pitfalls.is_empty() {
        output.push_str(PITFALLS_HEADING);
        output.push_str("\n\n");
        for pitfall in &model.pitfalls {
            output.push_str(&format!("- {}\n", pitfall));
        }
        output.push('\n');
    }

    output.push_str(&render_how_to_run());
    Some(output)
}

fn render_how_to_run() -> String {
    let mut output = String::from("## How to Run\n\n");
    output.push_str("1. Install dependencies:\n");
    output.push_str("   ```bash\n   npm install\n   ```\n\n");
    output.push_str("2. Run tests:\n");
    output.push_str("   ```bash\n   npx hardhat test\n   ```\n");
    output
}
