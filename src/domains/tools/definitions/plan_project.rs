//! Project planning tool definition.
//!
//! Produces a structured cross-phase project plan for a multi-agent
//! overseer. The phase skeleton is static; caller input only passes through
//! as metadata (goal, horizon, constraints, deliverables).

use async_trait::async_trait;
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};

use super::ToolDefinition;
use crate::core::context::ToolContext;
use crate::domains::tools::error::ToolError;

// ============================================================================
// Input / Output
// ============================================================================

/// Input payload for the plan_project tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanProjectInput {
    /// High level goal or problem statement.
    pub goal: String,

    /// Optional time horizon in weeks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline_weeks: Option<u32>,

    /// Optional list of notable constraints the overseer should respect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<String>>,

    /// Optional deliverables that should be produced by the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deliverables: Option<Vec<String>>,
}

/// A single step within a plan phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStep {
    pub title: String,
    pub summary: String,
    /// Role tags responsible for the step. Always non-empty.
    pub owners: Vec<String>,
}

/// A named phase of the generated plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPhase {
    pub name: String,
    pub objective: String,
    pub steps: Vec<PlanStep>,
}

/// Output payload for the plan_project tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanProjectOutput {
    pub goal: String,
    /// Echo of `timeline_weeks`; serialized as null when absent.
    pub horizon_weeks: Option<u32>,
    pub constraints: Vec<String>,
    pub deliverables: Vec<String>,
    pub phases: Vec<PlanPhase>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Plan project tool - generates a fixed four-phase project plan.
pub struct PlanProjectTool;

impl PlanProjectTool {
    /// Tool name as registered with the server.
    pub const NAME: &'static str = "plan_project";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Generate a structured cross-phase project plan for a multi-agent overseer.";

    /// Execute the tool logic.
    ///
    /// Pure defaulting transformation: required fields echo through, missing
    /// optionals collapse to null/empty, and the phase list is the same
    /// hard-coded skeleton on every invocation.
    pub fn execute(input: PlanProjectInput, context: &ToolContext) -> PlanProjectOutput {
        context.logger.info(&format!(
            "plan_project invoked (requestId: {}, goal: {})",
            context.request_id, input.goal
        ));

        PlanProjectOutput {
            goal: input.goal,
            horizon_weeks: input.timeline_weeks,
            constraints: input.constraints.unwrap_or_default(),
            deliverables: input.deliverables.unwrap_or_default(),
            phases: default_phases(),
        }
    }
}

#[async_trait]
impl ToolDefinition for PlanProjectTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> serde_json::Value {
        serde_json::to_value(schema_for!(PlanProjectInput))
            .unwrap_or(serde_json::Value::Null)
    }

    async fn invoke(
        &self,
        input: serde_json::Value,
        context: &ToolContext,
    ) -> Result<serde_json::Value, ToolError> {
        let params: PlanProjectInput = serde_json::from_value(input)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let output = Self::execute(params, context);

        serde_json::to_value(output).map_err(|e| ToolError::internal(e.to_string()))
    }
}

// ============================================================================
// Default Phases
// ============================================================================

fn step(title: &str, summary: &str, owners: &[&str]) -> PlanStep {
    PlanStep {
        title: title.to_string(),
        summary: summary.to_string(),
        owners: owners.iter().map(|o| o.to_string()).collect(),
    }
}

/// The fixed four-phase plan skeleton. Identical for every invocation.
fn default_phases() -> Vec<PlanPhase> {
    vec![
        PlanPhase {
            name: "Discovery".to_string(),
            objective: "Clarify scope, stakeholders, and success metrics.".to_string(),
            steps: vec![
                step(
                    "Stakeholder interviews",
                    "Identify key stakeholders and gather the outcomes they need.",
                    &["strategy"],
                ),
                step(
                    "Success metrics",
                    "Define measurable indicators to track progress and completion.",
                    &["strategy", "analytics"],
                ),
            ],
        },
        PlanPhase {
            name: "Design & Architecture".to_string(),
            objective: "Produce technical and operational blueprints for the Overseer."
                .to_string(),
            steps: vec![
                step(
                    "System design workshop",
                    "Draft architecture diagrams for agents, orchestrator, and persistence.",
                    &["architecture"],
                ),
                step(
                    "Implementation roadmap",
                    "Break down deliverables into milestones and allocate engineering ownership.",
                    &["architecture", "engineering"],
                ),
            ],
        },
        PlanPhase {
            name: "Execution".to_string(),
            objective: "Build, test, and integrate the agreed upon deliverables.".to_string(),
            steps: vec![
                step(
                    "Implementation sprints",
                    "Iterate through prioritized tasks with demos at the end of each sprint.",
                    &["engineering"],
                ),
                step(
                    "Quality verification",
                    "Run automated suites and manual reviews to confirm acceptance criteria.",
                    &["qa", "engineering"],
                ),
            ],
        },
        PlanPhase {
            name: "Launch & Feedback".to_string(),
            objective: "Release to target environment and capture learnings.".to_string(),
            steps: vec![
                step(
                    "Release planning",
                    "Coordinate launch checklist, comms, and rollback strategy.",
                    &["ops", "product"],
                ),
                step(
                    "Post-launch retrospective",
                    "Collect feedback, measure outcomes, and adjust backlog.",
                    &["product", "strategy"],
                ),
            ],
        },
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::{CaptureLogger, TracingToolLogger};
    use std::sync::Arc;

    fn test_context() -> ToolContext {
        ToolContext::new(Arc::new(TracingToolLogger))
    }

    #[test]
    fn test_plan_with_full_input() {
        let input = PlanProjectInput {
            goal: "Launch Overseer MCP server".to_string(),
            timeline_weeks: Some(6),
            constraints: Some(vec!["Must pass automated tests".to_string()]),
            deliverables: Some(vec!["Operational MCP endpoint".to_string()]),
        };

        let result = PlanProjectTool::execute(input, &test_context());

        assert_eq!(result.goal, "Launch Overseer MCP server");
        assert_eq!(result.horizon_weeks, Some(6));
        assert!(result
            .constraints
            .contains(&"Must pass automated tests".to_string()));
        assert!(result
            .deliverables
            .contains(&"Operational MCP endpoint".to_string()));
        assert!(!result.phases.is_empty());
        assert!(!result.phases[0].steps.is_empty());
    }

    #[test]
    fn test_plan_defaults_when_optionals_omitted() {
        let input = PlanProjectInput {
            goal: "Draft minimal viable plan".to_string(),
            timeline_weeks: None,
            constraints: None,
            deliverables: None,
        };

        let result = PlanProjectTool::execute(input, &test_context());

        assert_eq!(result.horizon_weeks, None);
        assert!(result.constraints.is_empty());
        assert!(result.deliverables.is_empty());
    }

    #[test]
    fn test_phases_are_static() {
        let make = |goal: &str| {
            PlanProjectTool::execute(
                PlanProjectInput {
                    goal: goal.to_string(),
                    timeline_weeks: None,
                    constraints: None,
                    deliverables: None,
                },
                &test_context(),
            )
        };

        let a = make("First goal");
        let b = make("Completely different goal");

        assert_eq!(a.phases, b.phases);
        assert_eq!(a.phases.len(), 4);

        let names: Vec<_> = a.phases.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Discovery",
                "Design & Architecture",
                "Execution",
                "Launch & Feedback"
            ]
        );

        for phase in &a.phases {
            assert!(phase.steps.len() >= 2);
            for step in &phase.steps {
                assert!(!step.owners.is_empty());
            }
        }
    }

    #[test]
    fn test_horizon_serializes_as_null_when_absent() {
        let output = PlanProjectTool::execute(
            PlanProjectInput {
                goal: "g".to_string(),
                timeline_weeks: None,
                constraints: None,
                deliverables: None,
            },
            &test_context(),
        );

        let json = serde_json::to_value(output).unwrap();
        assert!(json.get("horizonWeeks").unwrap().is_null());
        assert_eq!(json["constraints"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_invoke_round_trips_json() {
        let tool = PlanProjectTool;
        let input = serde_json::json!({
            "goal": "Launch Overseer MCP server",
            "timelineWeeks": 6,
            "constraints": ["Must pass automated tests"],
            "deliverables": ["Operational MCP endpoint"]
        });

        let result = tool.invoke(input, &test_context()).await.unwrap();
        assert_eq!(result["goal"], "Launch Overseer MCP server");
        assert_eq!(result["horizonWeeks"], 6);
        assert_eq!(result["phases"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_invoke_rejects_malformed_payload() {
        let tool = PlanProjectTool;
        // goal is required
        let result = tool
            .invoke(serde_json::json!({ "timelineWeeks": 3 }), &test_context())
            .await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn test_input_schema_marks_goal_required() {
        let tool = PlanProjectTool;
        let schema = tool.input_schema();
        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "goal"));
        assert!(schema["properties"].get("timelineWeeks").is_some());
    }

    #[test]
    fn test_execute_logs_goal_and_request_id() {
        let logger = Arc::new(CaptureLogger::new());
        let ctx = ToolContext::new(logger.clone());
        let request_id = ctx.request_id.clone();

        PlanProjectTool::execute(
            PlanProjectInput {
                goal: "Trace me".to_string(),
                timeline_weeks: None,
                constraints: None,
                deliverables: None,
            },
            &ctx,
        );

        let messages = logger.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Trace me"));
        assert!(messages[0].contains(&request_id));
    }
}
