use super::*;
use crate::data::log_store::{LogStore, MAX_RECORDS_PER_CATEGORY};
use chrono::{Duration, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory::verification_log::VerificationLogFactory};

mod prune;
mod read_all;
