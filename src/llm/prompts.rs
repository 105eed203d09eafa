/// Build the fixed analysis prompt for an interview transcript.
///
/// Asks for four clearly separated sections; section 3 must be a bare JSON
/// object so the score extractor has something machine-readable to find.
pub fn build_analysis_prompt(transcript: &str) -> String {
    format!(
        "Here is the transcript of an interview:\n\
-----------------------------------------\n\
{transcript}\n\
-----------------------------------------\n\
\n\
Please perform the following analysis and provide the output clearly separated:\n\
1. **Detailed Summary:** A comprehensive summary of the key points discussed during the interview.\n\
2. **Performance Analysis:** An evaluation of the interviewee's performance based on metrics like \
engagement (interaction, listening), clarity (articulation, conciseness), and enthusiasm \
(passion, interest). Score each metric on a scale of 1-10.\n\
3. **Chart Data (JSON):** Provide *only* the performance scores in a valid JSON object format \
like this: {{\"engagement\": <score>, \"clarity\": <score>, \"enthusiasm\": <score>}}. Do not \
include any text before or after the JSON object itself for this specific part.\n\
4. **Insights Report:** A brief report highlighting key insights, strengths, and potential areas \
for improvement observed from the transcript.\n"
    )
}
