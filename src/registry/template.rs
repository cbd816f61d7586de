//! Template keys and their static descriptors.

use std::fmt;

use crate::config::{ResolvedConfig, Transport};

/// Repository hosting every template.
pub const TEMPLATE_REPOSITORY: &str = "https://github.com/smithery-ai/sdk.git";

/// Sentinel subdirectory meaning "use the clone root as-is".
pub const REPOSITORY_ROOT: &str = ".";

/// One of the templates the scaffolder knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    /// HTTP transport server.
    Http,
    /// STDIO transport server.
    Stdio,
    /// ChatGPT app (beta); HTTP transport only.
    Gpt,
}

/// Where a template lives and what to tell the user about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub key: TemplateKey,
    pub repository_url: &'static str,
    /// Path inside the repository; [`REPOSITORY_ROOT`] for the whole clone.
    pub subdirectory: &'static str,
    pub beta_warning: Option<&'static str>,
}

static HTTP: TemplateDescriptor = TemplateDescriptor {
    key: TemplateKey::Http,
    repository_url: TEMPLATE_REPOSITORY,
    subdirectory: "examples/basic-server",
    beta_warning: None,
};

static STDIO: TemplateDescriptor = TemplateDescriptor {
    key: TemplateKey::Stdio,
    repository_url: TEMPLATE_REPOSITORY,
    subdirectory: "examples/local-filesystem",
    beta_warning: None,
};

static GPT: TemplateDescriptor = TemplateDescriptor {
    key: TemplateKey::Gpt,
    repository_url: TEMPLATE_REPOSITORY,
    subdirectory: "examples/open-ai-hello-server",
    beta_warning: Some("⚠ Notice: ChatGPT apps support is currently in beta."),
};

impl TemplateKey {
    /// Every template, in display order.
    pub fn all() -> [TemplateKey; 3] {
        [Self::Http, Self::Stdio, Self::Gpt]
    }

    /// Pick the template for a feature flag and transport.
    ///
    /// The feature flag wins over the transport.
    pub fn select(gpt: bool, transport: Transport) -> Self {
        if gpt {
            return Self::Gpt;
        }
        match transport {
            Transport::Http => Self::Http,
            Transport::Stdio => Self::Stdio,
        }
    }

    /// Static descriptor for this key.
    pub fn descriptor(self) -> &'static TemplateDescriptor {
        match self {
            Self::Http => &HTTP,
            Self::Stdio => &STDIO,
            Self::Gpt => &GPT,
        }
    }

    /// Short identifier.
    pub fn name(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Stdio => "stdio",
            Self::Gpt => "gpt",
        }
    }

    /// One-line description for listings.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Http => "MCP server over HTTP (runs on a server)",
            Self::Stdio => "MCP server over STDIO (runs on the user's machine)",
            Self::Gpt => "ChatGPT app (beta, HTTP only)",
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TemplateDescriptor {
    /// Subdirectory to extract, or `None` when the clone root is used as-is.
    pub fn extract_path(&self) -> Option<&'static str> {
        match self.subdirectory {
            "" | REPOSITORY_ROOT => None,
            path => Some(path),
        }
    }
}

/// Select the template descriptor for a resolved configuration.
///
/// Pure and total: every configuration maps to exactly one descriptor.
pub fn lookup(config: &ResolvedConfig) -> &'static TemplateDescriptor {
    TemplateKey::select(config.gpt, config.transport).descriptor()
}
