//! Prompt construction for the repair assistant.
//!
//! Every endpoint that talks to the model builds its prompt here so
//! the instruction text lives in one place and can be unit tested.

use fixhub_core::analysis::SkillLevel;

/// System message for image analysis requests.
pub const ANALYST_SYSTEM: &str = "You are an expert repair technician who can identify \
    broken items and provide detailed repair instructions.";

/// System message for diagnosis refinement.
pub const REFINE_SYSTEM: &str = "You are an expert repair technician. Refine the repair \
    diagnosis based on the user's answers to diagnostic questions.";

/// System message for interactive troubleshooting.
pub const TROUBLESHOOT_SYSTEM: &str =
    "You are a helpful repair technician providing troubleshooting guidance.";

/// System message for step-by-step deep dives.
pub const STEP_DETAILS_SYSTEM: &str =
    "You are a helpful repair technician providing detailed step-by-step guidance.";

/// System message for vendor directory lookups.
pub const VENDOR_SYSTEM: &str = "You are a local business directory assistant.";

/// System message for diagram generation.
pub const ILLUSTRATOR_SYSTEM: &str = "You are a technical illustrator.";

/// Instruction block adapting detail and tone to the user's experience.
fn skill_context(skill_level: SkillLevel) -> &'static str {
    match skill_level {
        SkillLevel::Beginner => {
            "This user is NEW TO REPAIRS. Provide VERY DETAILED, step-by-step instructions \
             with extra safety warnings. Assume they only have basic household tools. Suggest \
             alternatives for specialized tools. Use simple, non-technical language."
        }
        SkillLevel::Diy => {
            "This user has BASIC REPAIR EXPERIENCE. Provide clear, standard instructions. \
             Assume they have a typical DIY toolkit. Use moderate technical terminology."
        }
        SkillLevel::Pro => {
            "This user is an EXPERIENCED TECHNICIAN. Provide CONCISE, professional-level \
             instructions. Assume they have professional tools. Use technical terminology \
             freely. Minimize basic warnings."
        }
    }
}

/// Build the full image-analysis prompt.
///
/// Asks for a structured assessment (difficulty, cost and time
/// estimates, risk level, confidence) plus repair steps, tools, parts,
/// and safety tips, returned as a JSON object with fixed keys.
pub fn analysis_prompt(
    language: &str,
    skill_level: SkillLevel,
    model_number: Option<&str>,
) -> String {
    let skill = skill_context(skill_level);
    let model_context = match model_number {
        Some(number) => format!(
            "\nMODEL NUMBER PROVIDED: {number}\nUse this model number to provide MORE \
             ACCURATE parts specifications, compatibility information, and model-specific \
             repair steps."
        ),
        None => String::new(),
    };

    format!(
        r#"Analyze this image of a broken item and provide a detailed repair analysis in {language}.

USER SKILL LEVEL: {level}
{skill}{model_context}

CRITICAL SAFETY ASSESSMENT:
- Detect if repair involves: ELECTRICAL work, GAS systems, HVAC, STRUCTURAL repairs, or HIGH-RISK scenarios
- Assess your CONFIDENCE level (0-100) in the diagnosis
- If confidence < 70% OR a high-risk category is detected, set stop_and_call_pro = true

Please provide:
1. Item Type (e.g., 'Smartphone', 'Chair', 'Laptop', etc.)
2. Damage Description (what's broken)
3. Repair Difficulty (easy/medium/hard)
4. COST ESTIMATE (USD): low, typical, and high totals, a parts breakdown with
   individual prices, tools cost, labor hours range, and pricing assumptions
5. TIME ESTIMATE (minutes): prep, active, cure, and total time
6. RISK LEVEL (low/medium/high/critical) - CRITICAL for electrical/gas/structural
7. CONFIDENCE SCORE (0-100)
8. STOP_AND_CALL_PRO (true/false)
9. ASSUMPTIONS (list)
10. Step-by-step Repair Instructions (adapt detail level to skill level)
11. Tools Needed (list with prices)
12. Parts Needed (list with estimated prices and specifications)
13. Safety Tips (list, with CRITICAL warnings for high-risk repairs)

RISK LEVEL GUIDELINES:
- LOW: Cosmetic repairs, simple replacements, no power/gas involved
- MEDIUM: Requires tools, some technical skill, minor risks
- HIGH: Complex repairs, potential for injury, requires expertise
- CRITICAL: ELECTRICAL/GAS/STRUCTURAL - ALWAYS recommend professional

Format your response as JSON with these exact keys:
{{
  "item_type": "...",
  "damage_description": "...",
  "repair_difficulty": "easy|medium|hard",
  "estimated_time": "...",
  "cost_estimate": {{
    "low": 25,
    "typical": 50,
    "high": 100,
    "currency": "USD",
    "parts_breakdown": [{{"name": "Part A", "cost": 20}}],
    "tools_cost": 15,
    "labor_hours_range": {{"min": 1, "max": 2}},
    "assumptions": ["Using typical retail prices"]
  }},
  "time_estimate": {{"prep": 10, "active": 30, "cure": 0, "total": 40, "unit": "minutes"}},
  "risk_level": "low|medium|high|critical",
  "confidence_score": 85,
  "stop_and_call_pro": false,
  "assumptions": ["assumption 1"],
  "repair_steps": ["step 1"],
  "tools_needed": [{{"name": "...", "required": true, "estimated_cost": 10}}],
  "parts_needed": [{{"name": "...", "price": 20, "required": true, "link": "https://example.com"}}],
  "safety_tips": ["tip 1"]
}}"#,
        level = skill_level.as_str().to_uppercase(),
    )
}

/// Build the refinement prompt from the initial analysis and the
/// user's diagnostic answers.
pub fn refine_prompt(
    item_type: &str,
    damage_description: &str,
    initial_steps: &[String],
    answers: &[(String, String)],
) -> String {
    let answers_text: Vec<String> = answers
        .iter()
        .map(|(question_id, answer)| format!("Q{question_id}: {answer}"))
        .collect();

    format!(
        r#"Based on the initial analysis and the user's diagnostic answers, provide a refined, more accurate diagnosis and repair plan.

Initial Analysis:
Item Type: {item_type}
Damage: {damage_description}
Initial Steps: {steps:?}

User's Diagnostic Answers:
{answers}

Please provide:
1. Refined diagnosis (specific problem identified)
2. Updated repair steps (more targeted)
3. Specific parts or tools that are definitely needed
4. Any safety warnings specific to this diagnosis
5. Estimated difficulty and time

Format your response as JSON with these exact keys:
{{
  "refined_diagnosis": "specific problem description",
  "repair_steps": ["step 1", "step 2"],
  "tools_needed": ["tool 1", "tool 2"],
  "parts_needed": [{{"name": "part name", "link": "https://example.com"}}],
  "safety_tips": ["tip 1"],
  "repair_difficulty": "easy|medium|hard",
  "estimated_time": "XX-XX minutes",
  "confidence_level": "high|medium|low"
}}"#,
        steps = initial_steps,
        answers = answers_text.join("\n"),
    )
}

/// Build the troubleshooting follow-up prompt.
pub fn troubleshoot_prompt(
    item_type: &str,
    damage_description: &str,
    question: &str,
    user_answer: &str,
) -> String {
    format!(
        "Item: {item_type}\n\
         Damage: {damage_description}\n\
         Current Question: {question}\n\
         User Answer: {user_answer}\n\n\
         Based on this answer, provide specific next steps or ask a follow-up \
         question to diagnose the issue better."
    )
}

/// Build the deep-dive prompt for a single repair step.
pub fn step_details_prompt(item_type: &str, step_number: i32, step_text: &str) -> String {
    format!(
        r#"Provide a very detailed explanation for this repair step on a {item_type}:

Step {step_number}: {step_text}

Please provide:
1. **What to do**: Detailed instructions with specific actions
2. **Why it's important**: Explanation of why this step matters
3. **Common mistakes**: What to avoid
4. **Tips & tricks**: Pro tips to make it easier
5. **Tools/materials for this step**: What you specifically need
6. **Estimated time**: How long this step should take
7. **Warning signs**: What indicates you're doing it wrong

Format as a clear, easy-to-follow guide."#
    )
}

/// Build the vendor directory prompt.
pub fn vendor_search_prompt(item_type: &str, location: &str) -> String {
    format!(
        r#"Generate a list of 5 realistic local repair shops that specialize in fixing {item_type} in {location}.

For each vendor, provide: business name, specialization, full address, phone
number (format: (XXX) XXX-XXXX), professional email address, rating (1-5,
realistic decimal), number of reviews, distance from the location in miles,
estimated repair cost range, business hours, and an optional website.

Format the response as a JSON array:
[
  {{
    "name": "...",
    "specialization": "...",
    "address": "...",
    "phone": "...",
    "email": "info@example.com",
    "rating": 4.5,
    "reviews_count": 123,
    "distance": "2.3 miles",
    "estimated_cost": "$50-$150",
    "hours": "Mon-Fri 9AM-6PM, Sat 10AM-4PM",
    "website": "https://..."
  }}
]"#
    )
}

/// Build the diagram prompt from the item type and the first few
/// repair steps.
pub fn diagram_prompt(item_type: &str, repair_steps: &[String]) -> String {
    let steps: Vec<&str> = repair_steps.iter().take(3).map(String::as_str).collect();
    format!(
        "Create a clear, simple technical diagram showing how to repair a {item_type}.\n\
         The diagram should illustrate these repair steps:\n{}\n\n\
         Style: Clean, professional technical illustration with labels and arrows.",
        steps.join(", "),
    )
}
