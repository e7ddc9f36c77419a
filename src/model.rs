//! Workers AI model name resolution and validation.

/// Short name aliases for popular Workers AI catalog models.
const ALIASES: &[(&str, &str)] = &[
    // image models
    ("sdxl", "@cf/stabilityai/stable-diffusion-xl-base-1.0"),
    ("sdxl-lightning", "@cf/bytedance/stable-diffusion-xl-lightning"),
    ("flux-schnell", "@cf/black-forest-labs/flux-1-schnell"),
    ("dreamshaper", "@cf/lykon/dreamshaper-8-lcm"),
    // text models
    ("llama-3", "@cf/meta/llama-3-8b-instruct"),
    ("llama-3.1", "@cf/meta/llama-3.1-8b-instruct"),
    ("mistral", "@cf/mistral/mistral-7b-instruct-v0.1"),
    ("qwen", "@cf/qwen/qwen1.5-14b-chat-awq"),
];

/// Resolve a model name (alias or exact) to the full catalog identifier.
#[must_use]
pub fn resolve_model(name: &str) -> String {
    for &(alias, full) in ALIASES {
        if name == alias {
            return full.to_string();
        }
    }
    name.to_string()
}

/// Validate that a resolved model id has the Workers AI catalog shape
/// (`@namespace/vendor/model`).
///
/// # Errors
///
/// Returns an error naming the known aliases if the id is malformed.
pub fn validate_model(model: &str) -> Result<(), String> {
    let well_formed = model
        .strip_prefix('@')
        .is_some_and(|rest| rest.split('/').count() >= 3 && rest.split('/').all(|s| !s.is_empty()));

    if well_formed {
        Ok(())
    } else {
        let aliases: Vec<&str> = ALIASES.iter().map(|&(alias, _)| alias).collect();
        Err(format!(
            "Unknown model '{model}'. Use a full '@cf/...' catalog id or one of the aliases: {}",
            aliases.join(", ")
        ))
    }
}
