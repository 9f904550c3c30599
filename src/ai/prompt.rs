//! Prompt Assembler
//!
//! Renders collected project signals into natural-language prompts for the
//! generative backend. Rendering is pure and deterministic: same signals and
//! section name, same prompt string. No I/O happens here.
//!
//! Two modes:
//! - **Per-section**: one compact prompt per named README section
//! - **Whole-document**: one prompt embedding structure, contents, and
//!   insights, asking for a complete multi-section README

use crate::analyzer::ProjectContents;
use crate::types::{GenerationRequest, GenerationTarget, ProjectSignals};

/// Prompt section types
#[derive(Debug, Clone)]
enum PromptSection {
    /// Role definition with task
    Role { expertise: String, task: String },
    /// Text section with optional header
    Text {
        header: Option<String>,
        content: String,
    },
    /// Labelled bullet list
    List { header: String, items: Vec<String> },
    /// Fenced code block with a label
    Code { label: String, content: String },
}

/// Builder for consistent prompt construction.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    sections: Vec<PromptSection>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a role definition section
    pub fn role(mut self, expertise: &str, task: &str) -> Self {
        self.sections.push(PromptSection::Role {
            expertise: expertise.to_string(),
            task: task.to_string(),
        });
        self
    }

    /// Add a text section with header
    pub fn section(mut self, header: &str, content: &str) -> Self {
        self.sections.push(PromptSection::Text {
            header: Some(header.to_string()),
            content: content.to_string(),
        });
        self
    }

    /// Add a trailing instruction without a header
    pub fn text(mut self, content: &str) -> Self {
        self.sections.push(PromptSection::Text {
            header: None,
            content: content.to_string(),
        });
        self
    }

    /// Add a labelled bullet list (a dash placeholder when empty)
    pub fn list(mut self, header: &str, items: &[String]) -> Self {
        self.sections.push(PromptSection::List {
            header: header.to_string(),
            items: items.to_vec(),
        });
        self
    }

    /// Add a labelled code block
    pub fn code(mut self, label: &str, content: &str) -> Self {
        self.sections.push(PromptSection::Code {
            label: label.to_string(),
            content: content.to_string(),
        });
        self
    }

    /// Render all sections into the final prompt string
    pub fn build(self) -> String {
        let mut output = String::new();

        for section in &self.sections {
            match section {
                PromptSection::Role { expertise, task } => {
                    output.push_str(&format!("You are {}. {}\n\n", expertise, task));
                }
                PromptSection::Text { header, content } => {
                    if let Some(header) = header {
                        output.push_str(&format!("## {}\n{}\n\n", header, content));
                    } else {
                        output.push_str(&format!("{}\n\n", content));
                    }
                }
                PromptSection::List { header, items } => {
                    output.push_str(&format!("## {}\n", header));
                    if items.is_empty() {
                        output.push_str("- (none)\n");
                    } else {
                        for item in items {
                            output.push_str(&format!("- {}\n", item));
                        }
                    }
                    output.push('\n');
                }
                PromptSection::Code { label, content } => {
                    output.push_str(&format!("### {}\n```\n{}\n```\n\n", label, content));
                }
            }
        }

        output.trim_end().to_string()
    }
}

// =============================================================================
// Template Rendering
// =============================================================================

/// Render the per-section prompt for one named README section.
pub fn section_request(section: &str, signals: &ProjectSignals) -> GenerationRequest {
    let prompt = signal_context(PromptBuilder::new().role(
        "a technical writer specializing in developer documentation",
        &format!(
            "Based on the following project information, generate the '{}' section \
             for a README.md file.",
            section
        ),
    ), signals)
    .text(&format!(
        "Generate a concise and informative '{}' section in Markdown format. \
         Respond with the section body only, without the '## {}' heading.",
        section, section
    ))
    .build();

    GenerationRequest {
        target: GenerationTarget::Section(section.to_string()),
        prompt,
    }
}

/// Render the whole-document prompt from full signals, file contents, and
/// extracted insights.
pub fn whole_document_request(
    signals: &ProjectSignals,
    collected: &ProjectContents,
) -> GenerationRequest {
    let mut builder = signal_context(
        PromptBuilder::new().role(
            "a technical writer specializing in developer documentation",
            "Analyze the following project and write a complete, well-structured \
             README.md for it.",
        ),
        signals,
    );

    for (file, insight) in &collected.insights {
        let mut lines = Vec::new();
        if !insight.module_summary.is_empty() {
            lines.push(format!("Summary: {}", insight.module_summary));
        }
        lines.extend(insight.key_functions.iter().map(|f| format!("fn {}", f)));
        lines.extend(insight.key_classes.iter().map(|c| format!("class {}", c)));
        builder = builder.list(&format!("Insights: {}", file), &lines);
    }

    for (file, content) in &collected.contents {
        builder = builder.code(file, content);
    }

    let prompt = builder
        .text(
            "Write the README.md now. Use Markdown headings for each section \
             (overview, features, installation, usage, dependencies, license). \
             Respond with the README content only.",
        )
        .build();

    GenerationRequest {
        target: GenerationTarget::WholeDocument,
        prompt,
    }
}

fn signal_context(builder: PromptBuilder, signals: &ProjectSignals) -> PromptBuilder {
    let mut builder = builder
        .section("Project language", &signals.language.to_string())
        .section(
            "Main file",
            signals.main_file.as_deref().unwrap_or("(not identified)"),
        );

    if let Some(purpose) = &signals.purpose {
        builder = builder.section("Stated purpose", purpose);
    }

    builder
        .list("Project files", &signals.files)
        .list("Project directories", &signals.directories)
        .list("Dependencies", &signals.dependencies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;

    fn sample_signals() -> ProjectSignals {
        ProjectSignals {
            files: vec!["app.py".to_string(), "requirements.txt".to_string()],
            directories: vec!["src".to_string()],
            main_file: Some("app.py".to_string()),
            language: Language::Python,
            dependencies: vec!["flask".to_string(), "pytest".to_string()],
            purpose: Some("A sample tool.".to_string()),
        }
    }

    #[test]
    fn test_section_prompt_embeds_signals() {
        let request = section_request("Installation", &sample_signals());
        assert_eq!(
            request.target,
            GenerationTarget::Section("Installation".to_string())
        );
        assert!(request.prompt.contains("'Installation' section"));
        assert!(request.prompt.contains("Python"));
        assert!(request.prompt.contains("- app.py"));
        assert!(request.prompt.contains("- flask"));
        assert!(request.prompt.contains("A sample tool."));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let signals = sample_signals();
        let a = section_request("Usage", &signals);
        let b = section_request("Usage", &signals);
        assert_eq!(a.prompt, b.prompt);
    }

    #[test]
    fn test_whole_document_embeds_contents_and_insights() {
        let mut collected = ProjectContents::default();
        collected
            .contents
            .insert("app.py".to_string(), "print('hi')".to_string());
        collected.insights.insert(
            "app.py".to_string(),
            crate::types::FileInsight {
                module_summary: "A sample tool.".to_string(),
                key_functions: vec!["main: Start up.".to_string()],
                key_classes: vec![],
            },
        );

        let request = whole_document_request(&sample_signals(), &collected);
        assert_eq!(request.target, GenerationTarget::WholeDocument);
        assert!(request.prompt.contains("print('hi')"));
        assert!(request.prompt.contains("fn main: Start up."));
        assert!(request.prompt.contains("complete, well-structured"));
    }

    #[test]
    fn test_empty_lists_render_placeholder() {
        let signals = ProjectSignals::default();
        let request = section_request("Overview", &signals);
        assert!(request.prompt.contains("- (none)"));
        assert!(request.prompt.contains("(not identified)"));
    }
}
