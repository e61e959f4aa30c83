//! Prompt construction for the header mapping request.

use hmap_model::TemplateSchema;

/// Builds the mapping prompt sent to the oracle.
///
/// Lists the template headers and the uploaded file's headers and asks for
/// a bare JSON object response. The oracle is instructed to use only
/// template headers as values; the reconciler still treats the answer as
/// untrusted.
#[must_use]
pub fn build_mapping_prompt(template: &TemplateSchema, actual: &[String]) -> String {
    let mut prompt = String::new();
    prompt.push_str("You are a smart data assistant.\n\n");
    prompt.push_str(
        "Map each of the following headers to the most appropriate header \
         from the template list.\n\n",
    );
    prompt.push_str("Template headers:\n");
    push_header_list(&mut prompt, template.iter());
    prompt.push_str("\nHeaders to map:\n");
    push_header_list(&mut prompt, actual.iter().map(String::as_str));
    prompt.push_str(
        "\nRespond with a valid JSON object like:\n\
         { \"original_header\": \"mapped_template_header\", ... }\n\
         Only use headers from the template list as values.\n\
         Omit headers that have no appropriate template header.\n\
         Do not include any text before or after the JSON object.\n",
    );
    prompt
}

fn push_header_list<'a>(prompt: &mut String, headers: impl Iterator<Item = &'a str>) {
    for header in headers {
        prompt.push_str("- ");
        prompt.push_str(header);
        prompt.push('\n');
    }
}
