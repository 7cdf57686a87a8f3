//! Prompt construction for canvas generation.

use bmc_core::Section;

/// Build the single-shot instruction sent to the text-generation service.
///
/// The project description is embedded verbatim; the model is directed to
/// answer with nothing but a JSON object keyed by the nine canonical
/// section labels, each value made of full capitalized sentences.
pub fn build_prompt(description: &str) -> String {
    let keys = Section::ALL.map(|s| s.label()).join(", ");

    format!(
        "You are an expert business analyst. Based on the following project description, \
         generate a Business Model Canvas as valid JSON only. \
         Use exactly these keys: {keys}.\n\n\
         Each section should be written in full, descriptive sentences (not bullet points). \
         Each key must contain multiple points, each on a new line or separated by periods. \
         Each point must start with an uppercase letter and form a full, meaningful sentence.\n\n\
         Project Description:\n{description}\n\n\
         Output ONLY valid JSON"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_description_verbatim() {
        let prompt = build_prompt("We sell solar panels to rural homes.");
        assert!(prompt.contains("We sell solar panels to rural homes."));
    }

    #[test]
    fn test_prompt_names_all_nine_sections() {
        let prompt = build_prompt("anything");
        for section in Section::ALL {
            assert!(
                prompt.contains(section.label()),
                "prompt should name '{}'",
                section.label()
            );
        }
    }

    #[test]
    fn test_prompt_demands_json_only() {
        let prompt = build_prompt("anything");
        assert!(prompt.ends_with("Output ONLY valid JSON"));
    }
}
