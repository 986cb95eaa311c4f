use crate::domain::model::{FormPayload, SubmissionAck};
use crate::domain::ports::Submitter;
use crate::utils::error::{Result, UiError};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

/// Decides whether a simulated submission fails.
#[derive(Debug)]
pub enum FailurePolicy {
    Never,
    Always,
    /// Fails with probability `p` per call.
    Rate(f64),
    /// Plays back the given outcomes (`true` = fail), then succeeds.
    Scripted(Mutex<VecDeque<bool>>),
}

impl FailurePolicy {
    pub fn scripted(outcomes: impl IntoIterator<Item = bool>) -> Self {
        FailurePolicy::Scripted(Mutex::new(outcomes.into_iter().collect()))
    }

    fn should_fail(&self) -> bool {
        match self {
            FailurePolicy::Never => false,
            FailurePolicy::Always => true,
            FailurePolicy::Rate(p) => rand::random::<f64>() < *p,
            FailurePolicy::Scripted(queue) => queue
                .lock()
                .map(|mut q| q.pop_front().unwrap_or(false))
                .unwrap_or(false),
        }
    }
}

/// Waits, logs the payload and answers according to its failure policy.
pub struct SimulatedSubmitter {
    delay: Duration,
    policy: FailurePolicy,
    resource_delays: HashMap<String, Duration>,
    resource_policies: HashMap<String, FailurePolicy>,
    id_resources: Vec<String>,
    submissions: Mutex<Vec<(String, FormPayload)>>,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration, policy: FailurePolicy) -> Self {
        Self {
            delay,
            policy,
            resource_delays: HashMap::new(),
            resource_policies: HashMap::new(),
            id_resources: Vec::new(),
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn with_resource_delay(mut self, resource: &str, delay: Duration) -> Self {
        self.resource_delays.insert(resource.to_string(), delay);
        self
    }

    pub fn with_resource_policy(mut self, resource: &str, policy: FailurePolicy) -> Self {
        self.resource_policies.insert(resource.to_string(), policy);
        self
    }

    /// Successful submissions to `resource` get an `APP-<unix millis>` id.
    pub fn with_generated_id(mut self, resource: &str) -> Self {
        self.id_resources.push(resource.to_string());
        self
    }

    /// Every payload received so far, in arrival order.
    pub fn submissions(&self) -> Vec<(String, FormPayload)> {
        self.submissions
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.lock().map(|s| s.len()).unwrap_or(0)
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, resource: &str, payload: &FormPayload) -> Result<SubmissionAck> {
        let delay = self
            .resource_delays
            .get(resource)
            .copied()
            .unwrap_or(self.delay);
        tokio::time::sleep(delay).await;

        tracing::info!(
            "📥 Simulated '{}' submission: {}",
            resource,
            serde_json::to_string(payload)?
        );
        if let Ok(mut log) = self.submissions.lock() {
            log.push((resource.to_string(), payload.clone()));
        }

        let policy = self.resource_policies.get(resource).unwrap_or(&self.policy);
        if policy.should_fail() {
            return Err(UiError::submission(resource, "Simulated server error"));
        }

        let id = self
            .id_resources
            .iter()
            .any(|r| r == resource)
            .then(|| format!("APP-{}", chrono::Utc::now().timestamp_millis()));
        Ok(SubmissionAck { id })
    }
}

/// Posts payloads as JSON to `{base_url}/{resource}`.
pub struct HttpSubmitter {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpSubmitter {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource.trim_start_matches('/'))
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, resource: &str, payload: &FormPayload) -> Result<SubmissionAck> {
        let endpoint = self.endpoint(resource);

        // 構建請求
        let mut request = self.client.post(&endpoint).json(payload);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        tracing::debug!("📡 POST {}: {}", endpoint, response.status());

        if !response.status().is_success() {
            return Err(UiError::submission(
                resource,
                format!("API request failed with status: {}", response.status()),
            ));
        }

        // 回應可能是空的，也可能帶 id
        let body = response.text().await?;
        let id = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|json| {
                ["id", "applicationId"].iter().find_map(|key| match json.get(key) {
                    Some(serde_json::Value::String(s)) => Some(s.clone()),
                    Some(serde_json::Value::Number(n)) => Some(n.to_string()),
                    _ => None,
                })
            });

        Ok(SubmissionAck { id })
    }
}
