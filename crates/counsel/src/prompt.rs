/// Wraps a user's legal question in the answering instructions.
///
/// The query goes in verbatim. It is plain text for the model, not markup,
/// so nothing is escaped; handling adversarial input is up to the provider.
pub fn build_legal_prompt(query: &str) -> String {
    format!(
        r#"Você é um assistente jurídico especializado. Responda à seguinte consulta jurídica de forma técnica e fundamentada:

{}

Forneça sua resposta em português de forma clara e estruturada, incluindo:
1. Explicação técnica e completa
2. Base legal (leis, códigos, regulamentos relevantes)
3. Jurisprudência relevante quando aplicável
4. Considerações práticas importantes"#,
        query
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_query_verbatim() {
        let query = "Como funciona o divórcio por mútuo consentimento? {\"x\": 1}";
        let prompt = build_legal_prompt(query);
        assert!(prompt.contains(query));
        assert!(prompt.starts_with("Você é um assistente jurídico especializado."));
    }

    #[test]
    fn lists_the_four_sections_in_order() {
        let prompt = build_legal_prompt("guarda partilhada");
        let sections = [
            "1. Explicação técnica e completa",
            "2. Base legal",
            "3. Jurisprudência relevante",
            "4. Considerações práticas importantes",
        ];
        let positions: Vec<usize> = sections
            .iter()
            .map(|s| prompt.find(s).expect("section missing"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
