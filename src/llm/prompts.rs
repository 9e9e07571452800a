/// System role sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You are a machine learning expert.";

/// Build the MOM and Action Items instruction for a set of meeting notes.
///
/// The notes are embedded verbatim; nothing is validated or escaped.
pub fn build_mom_prompt(notes: &str) -> String {
    format!(
        "As a Natural Language Processing expert, please generate a structured summary from the following meeting notes. \
The summary should include both Minutes of Meeting (MOM) and Action Items, adhering to the following guidelines:\n\
\n\
1. **Concise Output:**\n\
\x20  - Ensure that the total length of the MOM and Action Items is concise and focused on the key points.\n\
\x20  - Provide a brief yet comprehensive summary without unnecessary details or explanations.\n\
\n\
2. **Minutes of Meeting (MOM):**\n\
\x20  - List only the essential outcomes, decisions, and agreements reached in the meeting.\n\
\x20  - Omit lengthy discussion points and provide only final conclusions or results.\n\
\n\
3. **Action Items:**\n\
\x20  - Provide specific, actionable tasks that arose from the meeting, clearly outlining responsibilities.\n\
\x20  - Tie each action item directly to the decisions or outcomes noted in the MOM.\n\
\n\
4. **Additional Details to Include:**\n\
\x20  - **Meeting Title**\n\
\x20  - **Date and Time**\n\
\x20  - **Location / Platform**\n\
\x20  - **Attendees**\n\
\x20  - **Agenda**\n\
\x20  - **Follow-up Meeting Details (if applicable)**\n\
\n\
The output should begin with 'MOM:' followed by numbered points for each item. \
After MOM, provide 'Action Items:' as a separate list, also with numbered points.\n\
\n\
Meeting Notes:\n\
{notes}\n\
\n\
Generate the MOM and Action Items based on these instructions."
    )
}
