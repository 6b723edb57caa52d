//! Prompt templates for every LLM task.
//!
//! Each builder is a pure function of its inputs. The JSON keys named in a
//! prompt are the keys [`super::parse`] looks for, so the two must change
//! together.

use std::fmt::Write;

use crate::domain::developer::DeveloperProfile;

/// Asks the model for one clarifying question about a feature request, or
/// the literal answer `None`.
pub fn clarification_question(description: &str, context: &[String]) -> String {
    format!(
        "Identify ambiguities in the following feature request:\n\"{}\"\nContext:\n{}\n\
         If there are ambiguities, ask a clarifying question. If none, respond 'None'.",
        description,
        context.join("\n")
    )
}

/// Asks the model for a complexity breakdown of a clarified feature request.
pub fn feature_complexity(description: &str, context: &[String]) -> String {
    format!(
        "Analyze the following feature request and the given code context:\n\"{}\"\nContext:\n{}\n\
         Assess the implementation complexity (low/medium/high), estimate story points, \
         list affected modules/files/classes, break down into subtasks, suggest any refactors, \
         and highlight potential edge cases or risks. Provide the answer in JSON format with keys: \
         complexity, storyPoints, affectedModules, subtasks, refactors, risks.",
        description,
        context.join("\n")
    )
}

pub fn ambiguity_detection(requirement: &str) -> String {
    format!(
        r#"Analyze the following software requirement for ambiguities, vagueness, or unclear specifications:

{requirement}

Provide a detailed analysis in JSON format with the following structure:
{{
  "ambiguityCategories": [list of ambiguity types found],
  "analysis": "detailed explanation of ambiguities",
  "confidenceScore": numeric value between 0 and 1,
  "suggestedImprovements": "specific suggestions to improve clarity"
}}"#
    )
}

pub fn scope_estimation(requirement: &str) -> String {
    format!(
        r#"Analyze the following software requirement and provide a detailed scope estimation:

{requirement}

Respond in JSON format with the following structure:
{{
  "estimatedHours": numeric estimate of hours required,
  "complexityLevel": "Low", "Medium", or "High",
  "confidenceLevel": numeric value between 0 and 1,
  "justification": "detailed explanation of the estimation",
  "riskFactors": "potential risks that could affect the estimate"
}}"#
    )
}

pub fn implementation_plan(requirement: &str) -> String {
    format!(
        r#"Create a detailed implementation plan for the following software requirement:

{requirement}

Respond in JSON format with the following structure:
{{
  "summary": "brief summary of the implementation approach",
  "implementationSteps": [ordered list of implementation steps],
  "technicalApproach": "detailed technical approach",
  "dependencies": "required dependencies and prerequisites"
}}"#
    )
}

/// Story point prompt, optionally grounded in repository complexity and a
/// developer profile.
pub fn story_points(
    requirement: &str,
    repository_complexity: Option<f64>,
    developer: Option<&DeveloperProfile>,
) -> String {
    let mut prompt = format!(
        "Analyze the following software requirement and calculate appropriate story points:\n\n{}\n\n",
        requirement
    );

    if let Some(score) = repository_complexity {
        let _ = write!(
            prompt,
            "Repository complexity score: {} (on a scale of 0 to 1, where higher values \
             indicate higher complexity)\n\n",
            score
        );
    }

    if let Some(dev) = developer {
        let _ = write!(
            prompt,
            "Developer Profile Information:\n\
             - Experience Level: {}\n\
             - Productivity Factor: {}\n\
             - Skills: {}\n\
             - Preferred Work Hours Per Day: {}\n\n\
             Please consider the developer's experience level, productivity factor, and skills \
             when calculating story points. Adjust the story points based on the developer's \
             profile - a more experienced developer with relevant skills might complete the task \
             with fewer story points, while a less experienced developer might need more story \
             points.\n\n",
            dev.experience_level(),
            dev.productivity_factor(),
            dev.skills().join(", "),
            dev.preferred_work_hours_per_day()
        );
    }

    prompt.push_str(
        r#"Respond in JSON format with the following structure:
{
  "storyPoints": numeric value (typically 1, 2, 3, 5, 8, 13, or 21),
  "complexity": "Low", "Medium", or "High",
  "confidenceLevel": numeric value between 0 and 1,
  "justification": "detailed explanation of the story point calculation",
  "considerations": [list of factors considered in the calculation],
  "developerFactors": "explanation of how the developer profile influenced the story points"
}"#,
    );
    prompt
}

pub fn repository_analysis(repository_content: &str) -> String {
    format!(
        r#"Analyze the following code repository content for complexity and structure:

{repository_content}

Respond in JSON format with the following structure:
{{
  "complexityScore": numeric value between 0 and 1,
  "codeQualityAssessment": "assessment of code quality",
  "suggestedImprovements": "suggestions for improving the codebase",
  "potentialIssues": [list of potential issues or bugs]
}}"#
    )
}
