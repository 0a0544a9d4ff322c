use rand::{SeedableRng, rngs::StdRng};
use swepin::{
    GenerateOptions, Language, PersonalIdentityNumber, PinFormat, generate, generate_with_rng,
    projection,
};

use crate::formats::OutputFormat;

/// Generate a batch, reproducibly when `seed` is given.
pub fn generate_batch(
    options: &GenerateOptions,
    seed: Option<u64>,
) -> Result<Vec<PersonalIdentityNumber>, String> {
    let result = match seed {
        Some(seed) => generate_with_rng(options, &mut StdRng::seed_from_u64(seed)),
        None => generate(options),
    };
    result.map_err(|e| format!("Error generating numbers: {}", e))
}

/// Render a generated batch for stdout.
pub fn render_batch(
    pins: &[PersonalIdentityNumber],
    layout: PinFormat,
    output: OutputFormat,
    language: Language,
    options: &GenerateOptions,
) -> Result<String, String> {
    let reference = options.reference_date_or_today();
    match output {
        OutputFormat::Text => Ok(pins
            .iter()
            .map(|pin| pin.format(layout))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&projection::batch_to_value(pins, language, reference))
                .map_err(|e| format!("Error serializing to JSON: {}", e))
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(&projection::batch_to_value(pins, language, reference))
                .map_err(|e| format!("Error serializing to YAML: {}", e))
        }
    }
}
