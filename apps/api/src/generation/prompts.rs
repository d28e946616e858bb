// All LLM prompt constants for the Generation module.
// User templates carry a `{user_context}` placeholder filled by `context::build_user_context`.

/// One of the four generated content sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    ResumeSummary,
    SkillHighlights,
    CoverLetter,
    PortfolioBio,
}

/// A fixed system prompt, user template and output budget for one section.
#[derive(Debug, Clone, Copy)]
pub struct SectionPrompt {
    pub system: &'static str,
    pub user_template: &'static str,
    pub max_tokens: u32,
}

impl SectionPrompt {
    pub fn render_user(&self, user_context: &str) -> String {
        self.user_template.replace("{user_context}", user_context)
    }
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::ResumeSummary,
        Section::SkillHighlights,
        Section::CoverLetter,
        Section::PortfolioBio,
    ];

    pub fn prompt(self) -> SectionPrompt {
        match self {
            Section::ResumeSummary => SectionPrompt {
                system: RESUME_SUMMARY_SYSTEM,
                user_template: RESUME_SUMMARY_PROMPT_TEMPLATE,
                max_tokens: 300,
            },
            Section::SkillHighlights => SectionPrompt {
                system: SKILL_HIGHLIGHTS_SYSTEM,
                user_template: SKILL_HIGHLIGHTS_PROMPT_TEMPLATE,
                max_tokens: 400,
            },
            Section::CoverLetter => SectionPrompt {
                system: COVER_LETTER_SYSTEM,
                user_template: COVER_LETTER_PROMPT_TEMPLATE,
                max_tokens: 300,
            },
            Section::PortfolioBio => SectionPrompt {
                system: PORTFOLIO_BIO_SYSTEM,
                user_template: PORTFOLIO_BIO_PROMPT_TEMPLATE,
                max_tokens: 500,
            },
        }
    }
}

pub const RESUME_SUMMARY_SYSTEM: &str = "You are a professional resume writer with 10+ years \
    of experience. Create a compelling professional summary that highlights the candidate's key \
    strengths, experience, and career objectives. The summary should be 3-4 sentences, \
    ATS-friendly, and tailored to their target role.";

pub const RESUME_SUMMARY_PROMPT_TEMPLATE: &str = r#"Based on the following candidate information, write a professional resume summary:

{user_context}

Write a concise, impactful professional summary that would appeal to hiring managers and ATS systems. Focus on quantifiable achievements and relevant skills."#;

pub const SKILL_HIGHLIGHTS_SYSTEM: &str = "You are a career counselor specializing in skill \
    assessment and presentation. Create a well-organized skills section that categorizes and \
    highlights the candidate's most relevant abilities for their target role.";

pub const SKILL_HIGHLIGHTS_PROMPT_TEMPLATE: &str = r#"Based on the following candidate information, create a comprehensive skills section:

{user_context}

Organize skills into relevant categories (e.g., Technical Skills, Soft Skills, Industry-Specific Skills) and highlight the most important ones for their target role. Present in a clear, scannable format."#;

pub const COVER_LETTER_SYSTEM: &str = "You are an expert cover letter writer. Create a \
    compelling opening paragraph for a cover letter that immediately grabs the hiring manager's \
    attention and showcases the candidate's most relevant qualifications.";

pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Based on the following candidate information, write a powerful cover letter opening paragraph:

{user_context}

The paragraph should be engaging, specific to their target role, and highlight their unique value proposition. Avoid generic statements and focus on concrete achievements and relevant experience."#;

pub const PORTFOLIO_BIO_SYSTEM: &str = "You are a personal branding expert. Create a \
    compelling professional bio for a portfolio or LinkedIn profile that showcases the \
    candidate's expertise, personality, and career journey in an engaging, third-person narrative.";

pub const PORTFOLIO_BIO_PROMPT_TEMPLATE: &str = r#"Based on the following candidate information, write a professional portfolio bio:

{user_context}

The bio should be written in third person, be engaging and personable while remaining professional, highlight their expertise and achievements, and give readers a sense of who they are as a professional. Keep it concise but impactful (2-3 paragraphs)."#;

/// System prompt for the single-shot legacy resume endpoint.
pub const LEGACY_RESUME_SYSTEM: &str = "You are a professional resume writer with expertise in \
    creating ATS-friendly resumes that get candidates interviews.";

pub const LEGACY_RESUME_MAX_TOKENS: u32 = 1500;
