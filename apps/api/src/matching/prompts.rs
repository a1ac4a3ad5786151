pub const FIT_REASONING_SYSTEM: &str =
    "You are a career assistant. Be concise and concrete. Use short headed sections.";

/// Template placeholders: {resume_skills}, {job_keywords}
pub const FIT_REASONING_PROMPT_TEMPLATE: &str = "\
Given resume skills and job keywords, explain fit, gaps, and next steps.

Resume skills:
{resume_skills}

Job keywords:
{job_keywords}

Provide: 1) fit summary, 2) missing skill clusters, 3) quick upskilling ideas.";

/// At most this many terms of each list go into the prompt.
pub const MAX_PROMPT_TERMS: usize = 200;
