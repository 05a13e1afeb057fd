//! Analysis prompt construction.

/// Build the fixed analysis instruction for one company name.
///
/// The name is embedded verbatim; the instruction asks for plain language,
/// no buy/sell advice, and summarized recent news. The output shape is
/// enforced separately by the response schema.
pub fn build_prompt(stock_name: &str) -> String {
    format!(
        "Analyze the stock '{stock_name}' for a beginner investor.\n\
         Use plain, jargon-free language. Do not give buy/sell advice. Just inform.\n\
         Also fetch the latest news about this company and provide a plain language \
         summary for each news item.\n\
         Provide the output in JSON format."
    )
}
