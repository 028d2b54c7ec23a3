//! Container service, autoscaling, load balancer, and bastion table.
//!
//! Durable tiers run a wide scaling envelope (up to 24 tasks) driven by four
//! daily schedules around market open and close; disposable tiers keep the
//! same schedules with a ceiling of 4 tasks.

use deploykit_common::types::Durability;
use serde::Serialize;

/// Command variant the service container starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StartupCommand {
    /// Optimized production entry point.
    Production,
    /// Development entry point with diagnostics.
    Development,
}

impl StartupCommand {
    /// Arguments passed to the container entry point.
    #[must_use]
    pub const fn args(self) -> &'static [&'static str] {
        match self {
            Self::Production => &["npm", "run", "start:prod"],
            Self::Development => &["npm", "run", "start:dev"],
        }
    }
}

/// Task shape of the container service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskShape {
    /// CPU units (1024 = one vCPU).
    pub cpu: u32,
    /// Memory in MiB.
    pub memory_mib: u32,
}

/// CPU-utilization target tracking with replica bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScalingRule {
    /// Minimum replica count.
    pub min_capacity: u32,
    /// Maximum replica count.
    pub max_capacity: u32,
    /// Target CPU utilization percentage.
    pub cpu_utilization: u32,
    /// Cooldown after scaling in, in seconds.
    pub scale_in_cooldown_secs: u32,
    /// Cooldown after scaling out, in seconds.
    pub scale_out_cooldown_secs: u32,
}

/// Replica bounds applied on a daily schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduledScaling {
    /// Rule name.
    pub name: &'static str,
    /// Cron expression (minute hour day-of-month month day-of-week).
    pub cron: &'static str,
    /// Minimum replica count from this point on.
    pub min_capacity: u32,
    /// Maximum replica count from this point on.
    pub max_capacity: u32,
}

/// Load balancer target group health settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    /// Consecutive successes before a target is healthy.
    pub healthy_threshold: u32,
    /// Consecutive failures before a target is unhealthy.
    pub unhealthy_threshold: u32,
    /// Seconds between checks.
    pub interval_secs: u32,
    /// Seconds before a check times out.
    pub timeout_secs: u32,
    /// Seconds of traffic ramp-up for new targets.
    pub slow_start_secs: u32,
    /// Seconds a sticky session cookie lives.
    pub stickiness_secs: u32,
}

/// Bastion host instance class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceSize {
    /// Smallest burstable class.
    Micro,
    /// Mid-size burstable class.
    Medium,
}

impl InstanceSize {
    /// Instance type name.
    #[must_use]
    pub const fn instance_type(self) -> &'static str {
        match self {
            Self::Micro => "t3.micro",
            Self::Medium => "t3.medium",
        }
    }
}

/// Container service settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComputeProfile {
    /// Task CPU and memory.
    pub task: TaskShape,
    /// Replicas requested at deployment.
    pub desired_count: u32,
    /// Entry point variant.
    pub startup_command: StartupCommand,
    /// Whether failed deployments roll back automatically.
    pub circuit_breaker_rollback: bool,
    /// Base target-tracking rule.
    pub scaling: ScalingRule,
    /// Pre-open, post-open, pre-close, and post-close rules.
    pub schedules: [ScheduledScaling; 4],
    /// Load balancer health settings.
    pub health_check: HealthCheck,
    /// Bastion host size.
    pub bastion: InstanceSize,
}

const PRE_OPEN: &str = "0 8 * * MON-FRI";
const POST_OPEN: &str = "30 9 * * MON-FRI";
const PRE_CLOSE: &str = "30 15 * * MON-FRI";
const POST_CLOSE: &str = "30 16 * * MON-FRI";

const fn schedule(name: &'static str, cron: &'static str, min: u32, max: u32) -> ScheduledScaling {
    ScheduledScaling {
        name,
        cron,
        min_capacity: min,
        max_capacity: max,
    }
}

const DURABLE: ComputeProfile = ComputeProfile {
    task: TaskShape {
        cpu: 4096,
        memory_mib: 8192,
    },
    desired_count: 4,
    startup_command: StartupCommand::Production,
    circuit_breaker_rollback: true,
    scaling: ScalingRule {
        min_capacity: 2,
        max_capacity: 8,
        cpu_utilization: 70,
        scale_in_cooldown_secs: 60,
        scale_out_cooldown_secs: 60,
    },
    schedules: [
        schedule("pre-open", PRE_OPEN, 8, 24),
        schedule("post-open", POST_OPEN, 4, 16),
        schedule("pre-close", PRE_CLOSE, 8, 24),
        schedule("post-close", POST_CLOSE, 2, 8),
    ],
    health_check: HealthCheck {
        healthy_threshold: 2,
        unhealthy_threshold: 3,
        interval_secs: 30,
        timeout_secs: 5,
        slow_start_secs: 60,
        stickiness_secs: 86_400,
    },
    bastion: InstanceSize::Medium,
};

const DISPOSABLE: ComputeProfile = ComputeProfile {
    task: TaskShape {
        cpu: 1024,
        memory_mib: 2048,
    },
    desired_count: 1,
    startup_command: StartupCommand::Development,
    circuit_breaker_rollback: false,
    scaling: ScalingRule {
        min_capacity: 1,
        max_capacity: 2,
        cpu_utilization: 90,
        scale_in_cooldown_secs: 120,
        scale_out_cooldown_secs: 120,
    },
    schedules: [
        schedule("pre-open", PRE_OPEN, 1, 4),
        schedule("post-open", POST_OPEN, 1, 2),
        schedule("pre-close", PRE_CLOSE, 1, 4),
        schedule("post-close", POST_CLOSE, 1, 2),
    ],
    health_check: HealthCheck {
        healthy_threshold: 2,
        unhealthy_threshold: 5,
        interval_secs: 60,
        timeout_secs: 10,
        slow_start_secs: 30,
        stickiness_secs: 3_600,
    },
    bastion: InstanceSize::Micro,
};

/// Resolves the compute profile for a durability class.
#[must_use]
pub const fn resolve(durability: Durability) -> ComputeProfile {
    match durability {
        Durability::Durable => DURABLE,
        Durability::Disposable => DISPOSABLE,
    }
}
