use super::*;
use crate::{
    model::security::Recommendation,
    service::security::{detect_suspicious_activity, SecurityService},
};

mod compute_stats;
mod detect_suspicious_activity;
