pub const COACH_SYSTEM: &str = "You are an experienced career coach and hiring manager. \
    Answer in plain Markdown with clear headings and concise bullets. \
    Do not invent facts about the candidate beyond the resume provided.";

/// Placeholders: {desired_job_title}, {resume_text}, {catalog_skills}
pub const GOALS_REVERSE_PROMPT_TEMPLATE: &str = "\
Perform reverse mapping from the desired job to the candidate's current resume.

Desired Job Title: {desired_job_title}
Resume (raw, truncated):
{resume_text}
{catalog_skills}
Deliver (keep total under ~900 words):
1) Core competencies (grouped)
2) Gap analysis
3) Learning roadmap (30/60/90/180 days)
4) Project suggestions (with outcomes)
5) Quick-win improvements for resume/LinkedIn
Use concise bullets and clear headings.";

/// Placeholders: {desired_job_title}, {resume_text}
pub const SIMULATOR_PROMPT_TEMPLATE: &str = "\
Simulate a realistic 1-week career simulator for a \"{desired_job_title}\" candidate,
using the resume for context.

Resume (raw):
{resume_text}

Provide:
- Overview (role context and KPIs)
- Day-by-day plan (Mon..Fri) with 2-3 tasks/day
- Constraints and stakeholder interactions
- Artifacts to produce
- Self-evaluation rubric (scored criteria)
Keep it concise but actionable.";

/// Placeholders: {desired_job_title}, {resume_text}
pub const PORTFOLIO_PROMPT_TEMPLATE: &str = "\
Create a portfolio plan for someone targeting \"{desired_job_title}\".

Resume (raw):
{resume_text}

Deliver:
1) 3-5 project ideas (problem, dataset/source, stack, evaluation)
2) Milestone plan (2-4 weeks each)
3) README.md template for one flagship project (sections + sample bullets)
4) Optional extensions to demonstrate senior-level thinking";

/// Placeholders: {count}, {job_title}, {seniority}, {resume_text}
pub const INTERVIEW_PROMPT_TEMPLATE: &str = "\
Act as a seasoned technical interviewer. Create {count} challenging, technical questions
tailored to a candidate with this resume and role.

Role: {job_title}
Seniority: {seniority}
Resume (raw):
{resume_text}

Guidelines:
- Focus on hands-on knowledge (not trivia).
- Mix fundamentals and scenario-based questions.
- Output a numbered list, 1-2 lines each.";

/// Placeholders: {count}, {course_title}
pub const ASSESSMENT_PROMPT_TEMPLATE: &str = "\
You are an instructional designer. Create {count} basic assessment questions
to check a learner's understanding of the course: \"{course_title}\".

Rules:
- Keep questions simple and beginner-friendly.
- Prefer a mix of short-answer and multiple-choice (mark MCQs with \"(MCQ)\").
- No answers, questions only.
- Number the questions 1..{count}.";
