//! Request/response DTOs for the migration REST API.
//!
//! DESIGN
//! ======
//! Types mirror the backend's JSON payloads. Fields the views never read are
//! still decoded with defaults so a richer backend response never breaks a
//! fetch, and enums with a closed vocabulary stay strongly typed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// =============================================================================
// STRATEGY
// =============================================================================

/// One of the six migration approaches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Rehost,
    #[default]
    Replatform,
    Refactor,
    Repurchase,
    Retain,
    Retire,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::Rehost,
        Strategy::Replatform,
        Strategy::Refactor,
        Strategy::Repurchase,
        Strategy::Retain,
        Strategy::Retire,
    ];

    /// Wire name, e.g. `"replatform"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Rehost => "rehost",
            Strategy::Replatform => "replatform",
            Strategy::Refactor => "refactor",
            Strategy::Repurchase => "repurchase",
            Strategy::Retain => "retain",
            Strategy::Retire => "retire",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strategy::Rehost => "Rehost",
            Strategy::Replatform => "Replatform",
            Strategy::Refactor => "Refactor",
            Strategy::Repurchase => "Repurchase",
            Strategy::Retain => "Retain",
            Strategy::Retire => "Retire",
        }
    }

    /// Short tooltip text for strategy pickers.
    pub fn description(self) -> &'static str {
        match self {
            Strategy::Rehost => "Lift-and-shift",
            Strategy::Replatform => "Lift, tinker, shift",
            Strategy::Refactor => "Re-architect for cloud-native",
            Strategy::Repurchase => "Move to SaaS",
            Strategy::Retain => "Keep on-premises",
            Strategy::Retire => "Decommission",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// MIGRATION STATUS
// =============================================================================

/// Migration lifecycle stage.
///
/// The dashboard drives only `Pending -> InProgress -> Completed`; the other
/// named stages exist on the backend and are displayed as-is. Anything the
/// client does not recognize is kept verbatim in `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MigrationStatus {
    Pending,
    Analyzing,
    Ready,
    InProgress,
    Validating,
    Completed,
    Failed,
    RolledBack,
    Other(String),
}

impl MigrationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MigrationStatus::Pending => "pending",
            MigrationStatus::Analyzing => "analyzing",
            MigrationStatus::Ready => "ready",
            MigrationStatus::InProgress => "in_progress",
            MigrationStatus::Validating => "validating",
            MigrationStatus::Completed => "completed",
            MigrationStatus::Failed => "failed",
            MigrationStatus::RolledBack => "rolled_back",
            MigrationStatus::Other(raw) => raw,
        }
    }

    /// Human label with underscores shown as spaces (`in_progress` -> `in progress`).
    pub fn label(&self) -> String {
        status_label(self.as_str())
    }

    /// The single forward transition the dashboard offers from this status.
    pub fn next(&self) -> Option<MigrationStatus> {
        match self {
            MigrationStatus::Pending => Some(MigrationStatus::InProgress),
            MigrationStatus::InProgress => Some(MigrationStatus::Completed),
            _ => None,
        }
    }

    /// Button text for [`MigrationStatus::next`], if a transition exists.
    pub fn advance_label(&self) -> Option<&'static str> {
        match self {
            MigrationStatus::Pending => Some("Start"),
            MigrationStatus::InProgress => Some("Complete"),
            _ => None,
        }
    }
}

impl From<String> for MigrationStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => MigrationStatus::Pending,
            "analyzing" => MigrationStatus::Analyzing,
            "ready" => MigrationStatus::Ready,
            "in_progress" => MigrationStatus::InProgress,
            "validating" => MigrationStatus::Validating,
            "completed" => MigrationStatus::Completed,
            "failed" => MigrationStatus::Failed,
            "rolled_back" => MigrationStatus::RolledBack,
            _ => MigrationStatus::Other(raw),
        }
    }
}

impl From<MigrationStatus> for String {
    fn from(status: MigrationStatus) -> Self {
        match status {
            MigrationStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for MigrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display label for a raw status key, as used by aggregate buckets.
pub fn status_label(raw: &str) -> String {
    raw.replace('_', " ")
}

// =============================================================================
// MIGRATIONS
// =============================================================================

/// A migration record as returned by `/migrations`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Migration {
    pub id: String,
    pub name: String,
    pub source_environment: String,
    pub target_environment: String,
    pub strategy: Strategy,
    pub status: MigrationStatus,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub rollback_available: bool,
}

/// Body for `POST /migrations`; also the create-form draft.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationDraft {
    pub name: String,
    pub source_environment: String,
    pub target_environment: String,
    pub strategy: Strategy,
}

impl MigrationDraft {
    /// Check required fields and return a trimmed copy ready to submit.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message naming the first missing field.
    pub fn validate(&self) -> Result<MigrationDraft, &'static str> {
        let name = self.name.trim();
        let source = self.source_environment.trim();
        let target = self.target_environment.trim();
        if name.is_empty() {
            return Err("Migration name is required.");
        }
        if source.is_empty() {
            return Err("Source environment is required.");
        }
        if target.is_empty() {
            return Err("Target environment is required.");
        }
        Ok(MigrationDraft {
            name: name.to_owned(),
            source_environment: source.to_owned(),
            target_environment: target.to_owned(),
            strategy: self.strategy,
        })
    }
}

/// Partial body for `PATCH /migrations/{id}`. Unset fields are omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MigrationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MigrationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Strategy>,
}

impl MigrationPatch {
    pub fn status(status: MigrationStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }
}

/// Optional filters for `GET /migrations`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MigrationQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MigrationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Aggregate counts from `/migrations/stats` (also embedded in the dashboard).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationStats {
    pub total: u64,
    /// Buckets in the order the backend sent them.
    #[serde(default)]
    pub by_status: IndexMap<String, u64>,
    #[serde(default)]
    pub by_strategy: IndexMap<String, u64>,
    #[serde(default)]
    pub total_resources: u64,
}

// =============================================================================
// RESOURCES
// =============================================================================

/// Known resource types, used for labels and the inventory filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Ec2Instance,
    RdsDatabase,
    S3Bucket,
    LambdaFunction,
    EcsService,
    ElasticacheCluster,
    LoadBalancer,
    ApiGateway,
}

impl ResourceType {
    pub const ALL: [ResourceType; 8] = [
        ResourceType::Ec2Instance,
        ResourceType::RdsDatabase,
        ResourceType::S3Bucket,
        ResourceType::LambdaFunction,
        ResourceType::EcsService,
        ResourceType::ElasticacheCluster,
        ResourceType::LoadBalancer,
        ResourceType::ApiGateway,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Ec2Instance => "ec2_instance",
            ResourceType::RdsDatabase => "rds_database",
            ResourceType::S3Bucket => "s3_bucket",
            ResourceType::LambdaFunction => "lambda_function",
            ResourceType::EcsService => "ecs_service",
            ResourceType::ElasticacheCluster => "elasticache_cluster",
            ResourceType::LoadBalancer => "load_balancer",
            ResourceType::ApiGateway => "api_gateway",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourceType::Ec2Instance => "EC2 Instance",
            ResourceType::RdsDatabase => "RDS Database",
            ResourceType::S3Bucket => "S3 Bucket",
            ResourceType::LambdaFunction => "Lambda Function",
            ResourceType::EcsService => "ECS Service",
            ResourceType::ElasticacheCluster => "ElastiCache",
            ResourceType::LoadBalancer => "Load Balancer",
            ResourceType::ApiGateway => "API Gateway",
        }
    }

    pub fn category(self) -> ResourceCategory {
        match self {
            ResourceType::Ec2Instance | ResourceType::LambdaFunction | ResourceType::EcsService => {
                ResourceCategory::Compute
            }
            ResourceType::RdsDatabase | ResourceType::ElasticacheCluster => ResourceCategory::Database,
            ResourceType::S3Bucket => ResourceCategory::Storage,
            ResourceType::LoadBalancer | ResourceType::ApiGateway => ResourceCategory::Networking,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

/// Display label for a raw `resource_type`, falling back to the raw value.
pub fn resource_type_label(raw: &str) -> String {
    ResourceType::parse(raw).map_or_else(|| raw.to_owned(), |t| t.label().to_owned())
}

/// Summary bucket a resource type rolls up into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceCategory {
    Compute,
    Database,
    Storage,
    Networking,
    Other,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 5] = [
        ResourceCategory::Compute,
        ResourceCategory::Database,
        ResourceCategory::Storage,
        ResourceCategory::Networking,
        ResourceCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceCategory::Compute => "compute",
            ResourceCategory::Database => "database",
            ResourceCategory::Storage => "storage",
            ResourceCategory::Networking => "networking",
            ResourceCategory::Other => "other",
        }
    }

    pub fn for_type(resource_type: &str) -> Self {
        ResourceType::parse(resource_type).map_or(ResourceCategory::Other, ResourceType::category)
    }
}

/// A discovered cloud resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub resource_id: String,
    pub name: String,
    pub resource_type: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

/// Optional filters for `GET /resources`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResourceQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Per-category resource counts from `/resources/summary`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSummary {
    pub total: u64,
    #[serde(default)]
    pub by_category: IndexMap<String, u64>,
}

// =============================================================================
// ANALYTICS
// =============================================================================

/// Combined payload from `/analytics/dashboard`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub migrations: MigrationStats,
    pub resources: ResourceSummary,
}

/// Monthly cost projection for one strategy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub current_monthly_estimate_usd: f64,
    pub projected_monthly_estimate_usd: f64,
    pub estimated_monthly_savings_usd: f64,
    pub estimated_savings_pct: f64,
    pub resource_count: u64,
    #[serde(default)]
    pub strategy: Option<Strategy>,
}

// =============================================================================
// ENVELOPES
// =============================================================================

/// Paginated list envelope used by `/migrations` and `/resources`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}
