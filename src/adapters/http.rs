use crate::domain::model::{CourseAssignment, RequirementGroup, Semester};
use crate::domain::ports::PlanService;
use crate::utils::error::{PlannerError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

/// reqwest-backed implementation of `PlanService` against the planner's
/// REST surface.
#[derive(Debug, Clone)]
pub struct HttpPlanService {
    client: Client,
    base_url: String,
    program: String,
}

#[derive(Debug, Deserialize)]
struct RequirementsResponse {
    #[serde(default)]
    groups: Vec<RequirementGroup>,
}

impl HttpPlanService {
    pub fn new(base_url: impl Into<String>, program: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            program: program.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(PlannerError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl PlanService for HttpPlanService {
    async fn fetch_plan_state(&self) -> Result<Vec<Semester>> {
        tracing::debug!("GET {}", self.url("/api/semesters"));
        let response = self.client.get(self.url("/api/semesters")).send().await?;
        let semesters = Self::check(response).await?.json().await?;
        Ok(semesters)
    }

    async fn add_assignment(
        &self,
        catalog_id: &str,
        semester_id: i64,
    ) -> Result<CourseAssignment> {
        tracing::debug!("POST {} course={}", self.url("/api/classes"), catalog_id);
        let response = self
            .client
            .post(self.url("/api/classes"))
            .json(&json!({
                "course_id": catalog_id,
                "semester_id": semester_id,
                "section": null,
            }))
            .send()
            .await?;
        let assignment = Self::check(response).await?.json().await?;
        Ok(assignment)
    }

    async fn remove_assignment(&self, assignment_id: i64) -> Result<()> {
        let url = self.url(&format!("/api/classes/{}", assignment_id));
        tracing::debug!("DELETE {}", url);
        let response = self.client.delete(url).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn search_requirements(
        &self,
        query: &str,
        current_term: &str,
        current_order: i64,
    ) -> Result<Vec<RequirementGroup>> {
        tracing::debug!("GET {} q='{}'", self.url("/api/requirements"), query);
        let response = self
            .client
            .get(self.url("/api/requirements"))
            .query(&[
                ("program", self.program.as_str()),
                ("q", query),
                ("current_term", current_term),
                ("current_order", &current_order.to_string()),
            ])
            .send()
            .await?;
        let body: RequirementsResponse = Self::check(response).await?.json().await?;
        Ok(body.groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn fetch_plan_state_decodes_semesters() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/semesters");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {
                        "id": 1,
                        "name": "Fall 2025",
                        "order": 0,
                        "term": "FALL",
                        "year": 2025,
                        "classes": [
                            {"id": 10, "catalog_id": "CS 101", "code": "CS 101",
                             "title": "Intro to CS", "credits": 4.0, "section": "A1"}
                        ]
                    }
                ]));
        });

        let service = HttpPlanService::new(server.base_url(), "BS-CS-Core-2025");
        let plan = service.fetch_plan_state().await.unwrap();

        mock.assert();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].classes[0].credits, 4.0);
        assert_eq!(plan[0].order, 0);
    }

    #[tokio::test]
    async fn add_assignment_posts_course_and_semester() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/classes")
                .json_body_partial(r#"{"course_id": "CS 101", "semester_id": 3}"#);
            then.status(201)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "id": 42, "catalog_id": "CS 101", "code": "CS 101",
                    "title": "Intro to CS", "credits": 4.0, "section": null
                }));
        });

        let service = HttpPlanService::new(server.base_url(), "BS-CS-Core-2025");
        let assignment = service.add_assignment("CS 101", 3).await.unwrap();

        mock.assert();
        assert_eq!(assignment.id, 42);
    }

    #[tokio::test]
    async fn conflict_status_becomes_status_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/classes");
            then.status(409).body("course already planned for this student");
        });

        let service = HttpPlanService::new(server.base_url(), "BS-CS-Core-2025");
        let err = service.add_assignment("CS 101", 3).await.unwrap_err();

        match err {
            PlannerError::Status { status, message } => {
                assert_eq!(status, 409);
                assert!(message.contains("already planned"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn search_requirements_passes_order_and_unwraps_groups() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/requirements")
                .query_param("program", "BS-CS-Core-2025")
                .query_param("q", "cs")
                .query_param("current_term", "FALL")
                .query_param("current_order", "2");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "program": {"code": "BS-CS-Core-2025", "name": "CS Core"},
                    "groups": [
                        {
                            "group_id": 1,
                            "title": "Core",
                            "required_count": 2,
                            "courses": [
                                {"id": 1, "catalog_id": "CS 201", "code": "CS 201",
                                 "title": "Data Structures", "credits": 4.0,
                                 "offered_terms": ["FALL", "SPRING"],
                                 "offered_this_term": true,
                                 "taken": false, "assigned": false,
                                 "prereq_ok": false, "prereq_ok_planned": true,
                                 "unmet_prereqs": []}
                            ]
                        }
                    ]
                }));
        });

        let service = HttpPlanService::new(server.base_url(), "BS-CS-Core-2025");
        let groups = service.search_requirements("cs", "FALL", 2).await.unwrap();

        mock.assert();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].courses[0].prereq_ok_planned, Some(true));
    }

    #[tokio::test]
    async fn remove_assignment_hits_the_resource_path() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(DELETE).path("/api/classes/42");
            then.status(204);
        });

        let service = HttpPlanService::new(server.base_url(), "BS-CS-Core-2025");
        service.remove_assignment(42).await.unwrap();

        mock.assert();
    }
}
