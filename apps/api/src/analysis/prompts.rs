// All LLM prompt templates for the analysis module.
// Placeholders are filled with `llm_client::prompts::fill_template`.

/// CV analysis prompt. Replace: {cv_text}, {json_only}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following CV in detail and respond with a JSON object in exactly this format:

{
  "strengths": ["strength 1", "strength 2", ...],
  "weaknesses": ["weakness 1", "weakness 2", ...],
  "technical_skills": ["skill 1", "skill 2", ...],
  "overall_assessment": "short assessment text",
  "recommendations": ["recommendation 1", "recommendation 2", ...]
}

CV TEXT:
{cv_text}

{json_only}"#;

/// Cover letter prompt. Replace: {cv_text}, {job_description}, {plain_text_only}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a professional cover letter based on the CV and the job posting below.

The cover letter must use a professional, confident register and be between 300 and 400 words.

Connect the strengths in the candidate's CV to the requirements in the job posting.

CV:
{cv_text}

JOB POSTING:
{job_description}

{plain_text_only}"#;

/// Interview questions prompt. Replace: {cv_text}, {json_only}
pub const INTERVIEW_QUESTIONS_PROMPT_TEMPLATE: &str = r#"Create interview questions for the candidate whose CV is below. The questions must fit the candidate's experience and skills.

Respond with a JSON object in exactly this format:

{
  "technical_questions": [
    {"question": "question text", "purpose": "why this question is asked"},
    ...
  ],
  "behavioral_questions": [
    {"question": "question text", "purpose": "why this question is asked"},
    ...
  ],
  "general_questions": [
    {"question": "question text", "purpose": "why this question is asked"},
    ...
  ]
}

CV TEXT:
{cv_text}

Produce at least 5 questions in every category.
{json_only}"#;
