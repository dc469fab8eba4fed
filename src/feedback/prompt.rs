use super::FeedbackContext;

pub const SYSTEM_PROMPT: &str = "Eres un experto en copywriting, especializado en marketing \
directo y ventas. Tu estilo es directo, ingenioso y sin pelos en la lengua.";

/// User prompt asking for the four-part critique of one evaluated text.
pub fn build_user_prompt(ctx: &FeedbackContext) -> String {
    format!(
        "Eres un experto en copywriting con un estilo directo, ingenioso y brutalmente honesto. \
         Analiza el siguiente texto usando el método ZEN TAO. El texto es:\n\n\
         \"{text}\"\n\n\
         Y estos son los resultados del análisis inicial:\n\n\
         {summary}\n\n\
         Da un feedback profundo y personalizado que incluya:\n\
         1. Críticas específicas de las partes más flojas\n\
         2. Sugerencias concretas para mejorar\n\
         3. Ejemplos de reescritura\n\
         4. Consejos para aumentar la conversión con porcentaje estimado\n\
         Usa un tono directo, ingenioso y con humor negro.",
        text = ctx.text,
        summary = ctx.summary,
    )
}
