// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The scenario content shipped with the application.
//!
//! Content is data, not logic: two scenarios per domain, each with four
//! options ranked 1-5 on effectiveness and tagged with per-competency
//! impact values.

use compass_domain::{AnswerOption, CompetencyImpact, Domain, Scenario};

fn option(
    id: &str,
    text: &str,
    effectiveness: u8,
    feedback: &str,
    impact: CompetencyImpact,
) -> AnswerOption {
    AnswerOption::new(
        id.to_string(),
        text.to_string(),
        effectiveness,
        feedback.to_string(),
        impact,
    )
}

/// Returns every scenario shipped with the application, in catalog order.
pub(crate) fn builtin_scenarios() -> Vec<Scenario> {
    let mut scenarios: Vec<Scenario> = Vec::new();
    scenarios.extend(ai_scenarios());
    scenarios.extend(servicenow_scenarios());
    scenarios.extend(salesforce_scenarios());
    scenarios
}

fn ai_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: String::from("ai-1"),
            domain: Domain::Ai,
            title: String::from("Ethical AI Data Usage"),
            context: String::from(
                "You're leading an AI project for a healthcare provider that involves analyzing patient data to predict treatment outcomes.",
            ),
            problem: String::from(
                "Your team discovers that the data contains unintended personal identifiers that weren't supposed to be included. The project deadline is in two days, and removing this data would require reprocessing everything, potentially delaying delivery.",
            ),
            options: vec![
                option(
                    "ai-1-a",
                    "Continue using the data as is since the project is internal and the personal identifiers won't be exposed publicly.",
                    1,
                    "This approach disregards data privacy regulations and ethical considerations, creating significant legal and reputational risks.",
                    CompetencyImpact::new(1, 0, 0, 1),
                ),
                option(
                    "ai-1-b",
                    "Inform the client immediately, explain the situation and propose a revised timeline with proper data processing.",
                    5,
                    "This transparent approach prioritizes ethics and compliance while proactively managing client expectations about necessary timeline adjustments.",
                    CompetencyImpact::new(5, 3, 5, 4),
                ),
                option(
                    "ai-1-c",
                    "Quickly implement a basic anonymization layer before processing, then deliver on time with a note about potential data limitations.",
                    3,
                    "While this attempts to balance timeline and ethics, a rushed anonymization approach may be insufficient for compliance and could create false confidence.",
                    CompetencyImpact::new(3, 2, 2, 3),
                ),
                option(
                    "ai-1-d",
                    "Ask your team to work overtime to clean the data properly while not informing the client about the issue.",
                    2,
                    "While addressing the data issue, this option creates team burnout and lacks necessary transparency with the client about potential risks and challenges.",
                    CompetencyImpact::new(2, 1, 0, 2),
                ),
            ],
            illustration: Some(String::from("/ai-scenario-1.svg")),
        },
        Scenario {
            id: String::from("ai-2"),
            domain: Domain::Ai,
            title: String::from("Model Performance Discrepancy"),
            context: String::from(
                "Your team has developed a machine learning model for customer churn prediction that performed excellently in testing with 92% accuracy.",
            ),
            problem: String::from(
                "After three weeks in production, the client reports that the model's predictions don't match their business reality, with many false positives. Your initial investigation confirms the model is working as designed.",
            ),
            options: vec![
                option(
                    "ai-2-a",
                    "Explain to the client that the model is statistically sound, and the issue must be with their interpretation of results or data quality.",
                    1,
                    "This defensive response dismisses the client's valid business concerns and fails to investigate potential issues with model generalizability or concept drift.",
                    CompetencyImpact::new(1, 0, 0, 1),
                ),
                option(
                    "ai-2-b",
                    "Schedule a workshop with the client's business experts to understand their observations, review prediction examples, and identify potential gaps between testing and production environments.",
                    5,
                    "This collaborative approach acknowledges the client's concerns while establishing a framework to diagnose real-world model performance issues systematically.",
                    CompetencyImpact::new(5, 4, 5, 4),
                ),
                option(
                    "ai-2-c",
                    "Offer to retrain the model immediately with new production data to improve its performance.",
                    3,
                    "While action-oriented, this solution jumps to implementation before properly diagnosing the root cause, which might waste resources if the issue lies elsewhere.",
                    CompetencyImpact::new(2, 3, 2, 3),
                ),
                option(
                    "ai-2-d",
                    "Ask the client to provide detailed documentation of all the cases where the model failed, then investigate each individually.",
                    2,
                    "This puts the burden on the client and focuses on individual cases rather than systemic patterns, potentially missing larger issues with the model's design or assumptions.",
                    CompetencyImpact::new(3, 1, 1, 2),
                ),
            ],
            illustration: Some(String::from("/ai-scenario-2.svg")),
        },
    ]
}

fn servicenow_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: String::from("servicenow-1"),
            domain: Domain::ServiceNow,
            title: String::from("Implementation Scope Creep"),
            context: String::from(
                "You're three weeks into a ServiceNow ITSM implementation for a mid-sized manufacturing company.",
            ),
            problem: String::from(
                "During a demo, the client's CIO asks for additional custom workflows for their specialized manufacturing processes, which weren't in the original scope. These would require significant development time.",
            ),
            options: vec![
                option(
                    "sn-1-a",
                    "Agree to include all requested features to maintain a good client relationship, knowing your team will need to work overtime.",
                    1,
                    "This creates unrealistic expectations, risks team burnout, project quality, and timeline without addressing the commercial impact of scope changes.",
                    CompetencyImpact::new(1, 1, 2, 0),
                ),
                option(
                    "sn-1-b",
                    "Acknowledge the requests and schedule a follow-up meeting to review the impact on timeline, resources, and budget, then present options for a potential phase 2.",
                    5,
                    "This maintains client partnership while establishing proper scope management processes, allowing for informed decisions about priorities, resources, and commercial considerations.",
                    CompetencyImpact::new(5, 4, 5, 5),
                ),
                option(
                    "sn-1-c",
                    "Explain that these features are out of scope and cannot be accommodated in the current project timeline or budget.",
                    2,
                    "While technically correct about scope boundaries, this rigid response fails to explore alternatives or understand the client's underlying business needs.",
                    CompetencyImpact::new(2, 1, 1, 3),
                ),
                option(
                    "sn-1-d",
                    "Suggest implementing a simplified version of the requested features using out-of-box configuration rather than custom development.",
                    3,
                    "This solution-oriented approach attempts compromise but makes assumptions about requirements without proper analysis of business needs or impact.",
                    CompetencyImpact::new(3, 3, 3, 3),
                ),
            ],
            illustration: Some(String::from("/servicenow-scenario-1.svg")),
        },
        Scenario {
            id: String::from("servicenow-2"),
            domain: Domain::ServiceNow,
            title: String::from("Data Migration Challenge"),
            context: String::from(
                "You're implementing ServiceNow CMDB for a large financial institution that needs to migrate data from multiple legacy systems.",
            ),
            problem: String::from(
                "Two weeks before go-live, you discover that 30% of the data from the main legacy system contains inconsistencies that will cause relationship mapping problems in ServiceNow.",
            ),
            options: vec![
                option(
                    "sn-2-a",
                    "Delay the go-live date by one month to properly cleanse and map all the data.",
                    3,
                    "While ensuring data quality, this option immediately jumps to a significant delay without exploring intermediate solutions or client priorities.",
                    CompetencyImpact::new(3, 2, 2, 3),
                ),
                option(
                    "sn-2-b",
                    "Proceed with the launch using only the 70% clean data, then address the problematic records afterward.",
                    2,
                    "This risks system integrity and user experience, potentially creating more work later to fix relationship inconsistencies and data trust issues.",
                    CompetencyImpact::new(1, 2, 1, 2),
                ),
                option(
                    "sn-2-c",
                    "Meet with the client stakeholders to present the issue, its implications, and a range of options with associated tradeoffs between time, data completeness, and system integrity.",
                    5,
                    "This transparent approach brings the client into decision-making with full information, balancing technical considerations with business priorities.",
                    CompetencyImpact::new(5, 4, 5, 4),
                ),
                option(
                    "sn-2-d",
                    "Have your team work nights and weekends to manually fix the data issues without informing the client of the problem.",
                    1,
                    "This non-transparent approach creates team burnout, quality risks from rushed work, and misses an opportunity to address root causes of data issues.",
                    CompetencyImpact::new(1, 0, 0, 2),
                ),
            ],
            illustration: Some(String::from("/servicenow-scenario-2.svg")),
        },
    ]
}

fn salesforce_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: String::from("salesforce-1"),
            domain: Domain::Salesforce,
            title: String::from("Unclear Requirements"),
            context: String::from(
                "You're configuring a Salesforce Sales Cloud implementation for a retail client who wants to track in-store customer interactions.",
            ),
            problem: String::from(
                "The stakeholders from different departments disagree about what fields and processes are needed. The marketing team wants detailed customer journey tracking, while sales managers want a streamlined quick-entry process for associates.",
            ),
            options: vec![
                option(
                    "sf-1-a",
                    "Implement all requested fields and make them all required to ensure complete data.",
                    1,
                    "This creates a burdensome user experience that satisfies neither team's core needs and will likely lead to poor adoption and data quality.",
                    CompetencyImpact::new(1, 1, 1, 1),
                ),
                option(
                    "sf-1-b",
                    "Side with the sales managers since they'll be the primary system users.",
                    2,
                    "While acknowledging user experience importance, this fails to address valid marketing requirements and organizational alignment needs.",
                    CompetencyImpact::new(2, 1, 2, 2),
                ),
                option(
                    "sf-1-c",
                    "Facilitate a workshop with both departments to map the customer journey, identify core vs. nice-to-have fields, and design a tiered data entry approach with required, recommended, and optional fields.",
                    5,
                    "This collaborative approach aligns stakeholders around shared goals while designing a solution that balances comprehensive data with usability.",
                    CompetencyImpact::new(5, 5, 5, 4),
                ),
                option(
                    "sf-1-d",
                    "Escalate to the client's executive sponsor to make the final decision on whose requirements take priority.",
                    3,
                    "While seeking resolution, this option prematurely escalates before attempting collaborative problem-solving and risks creating internal tension.",
                    CompetencyImpact::new(2, 2, 3, 3),
                ),
            ],
            illustration: Some(String::from("/salesforce-scenario-1.svg")),
        },
        Scenario {
            id: String::from("salesforce-2"),
            domain: Domain::Salesforce,
            title: String::from("Integration Failure"),
            context: String::from(
                "You've implemented Salesforce CPQ for a telecommunications company, integrated with their legacy billing system.",
            ),
            problem: String::from(
                "During testing, you discover that 15% of quotes fail when pushed to the billing system. The client is frustrated because they've already extended the go-live date twice, and business users are eager to start using the system.",
            ),
            options: vec![
                option(
                    "sf-2-a",
                    "Implement a manual workaround where failed quotes are flagged for manual processing by the billing team.",
                    2,
                    "This creates an inefficient process that doesn't address root causes and risks scaling problems as volume increases.",
                    CompetencyImpact::new(1, 2, 2, 3),
                ),
                option(
                    "sf-2-b",
                    "Launch on schedule, explaining that the 15% failure rate is within acceptable parameters for a new integration.",
                    1,
                    "This dismisses a significant failure rate that will directly impact customer experience and billing accuracy, creating business risk.",
                    CompetencyImpact::new(0, 1, 0, 1),
                ),
                option(
                    "sf-2-c",
                    "Analyze the patterns in the failing quotes, identify common factors, and develop targeted fixes for those specific scenarios while proceeding with implementation for the working cases.",
                    4,
                    "This balanced approach addresses critical issues while allowing progress, though it would be stronger with more client communication.",
                    CompetencyImpact::new(4, 3, 3, 4),
                ),
                option(
                    "sf-2-d",
                    "Present the client with a detailed analysis of the failing scenarios, a plan for fixing top issues, options for temporary workarounds, and recommended phased go-live with clearly defined success criteria.",
                    5,
                    "This comprehensive approach combines problem-solving with transparent client communication and structured decision-making.",
                    CompetencyImpact::new(5, 4, 5, 5),
                ),
            ],
            illustration: Some(String::from("/salesforce-scenario-2.svg")),
        },
    ]
}
