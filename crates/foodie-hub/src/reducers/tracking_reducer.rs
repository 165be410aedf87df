//! Order Tracking Reducer
//!
//! A finished lookup always leaves `Loading`: a miss becomes `NotFound`.
//! Results for any id other than the one in flight are dropped.

use crate::actions::TrackingAction;
use crate::order_registry::normalize_order_id;
use crate::state::TrackingState;

/// Reduce tracking actions
pub fn reduce_tracking(state: TrackingState, action: &TrackingAction) -> TrackingState {
    match action {
        TrackingAction::Submit(input) => match normalize_order_id(input) {
            Some(order_id) => TrackingState::Loading { order_id },
            None => {
                log::debug!("Tracking: blank order id, nothing to look up");
                state
            }
        },
        TrackingAction::Resolved { order_id, record } => match state {
            TrackingState::Loading {
                order_id: in_flight,
            } if in_flight == *order_id => match record {
                Some(record) if record.id == in_flight => TrackingState::Found(record.clone()),
                Some(record) => {
                    log::warn!(
                        "Tracking: lookup of {} returned order {}, ignoring",
                        in_flight,
                        record.id
                    );
                    TrackingState::Loading { order_id: in_flight }
                }
                None => TrackingState::NotFound { order_id: in_flight },
            },
            other => {
                log::debug!("Tracking: ignoring result for {}, not the lookup in flight", order_id);
                other
            }
        },
        TrackingAction::Reset => TrackingState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order_registry::{OrderRecord, OrderRegistry};

    fn submit(input: &str) -> TrackingAction {
        TrackingAction::Submit(input.to_string())
    }

    fn resolved(order_id: &str, record: Option<OrderRecord>) -> TrackingAction {
        TrackingAction::Resolved {
            order_id: order_id.to_string(),
            record,
        }
    }

    #[test]
    fn test_submit_normalizes_and_loads() {
        let state = reduce_tracking(TrackingState::Idle, &submit("  fh123456 "));
        assert_eq!(
            state,
            TrackingState::Loading {
                order_id: "FH123456".to_string()
            }
        );
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        assert_eq!(reduce_tracking(TrackingState::Idle, &submit("   ")), TrackingState::Idle);
    }

    #[test]
    fn test_found() {
        let registry = OrderRegistry::mock();
        let loading = reduce_tracking(TrackingState::Idle, &submit("FH789012"));
        let record = registry.get("FH789012").cloned();
        let state = reduce_tracking(loading, &resolved("FH789012", record.clone()));
        assert_eq!(state.order(), record.as_ref());
    }

    #[test]
    fn test_miss_is_not_found_rather_than_loading() {
        let loading = reduce_tracking(TrackingState::Idle, &submit("FH000000"));
        let state = reduce_tracking(loading, &resolved("FH000000", None));
        assert_eq!(
            state,
            TrackingState::NotFound {
                order_id: "FH000000".to_string()
            }
        );
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_result_is_ignored() {
        let state = reduce_tracking(TrackingState::Idle, &resolved("FH123456", None));
        assert_eq!(state, TrackingState::Idle);
    }

    #[test]
    fn test_superseded_lookup_result_is_dropped() {
        let registry = OrderRegistry::mock();
        let state = reduce_tracking(TrackingState::Idle, &submit("FH123456"));
        let state = reduce_tracking(state, &submit("FH000000"));

        let late = registry.get("FH123456").cloned();
        let state = reduce_tracking(state, &resolved("FH123456", late));
        assert!(state.order().is_none());
        assert_eq!(
            state,
            TrackingState::Loading {
                order_id: "FH000000".to_string()
            }
        );

        let late_miss = reduce_tracking(state.clone(), &resolved("FH123456", None));
        assert_eq!(late_miss, state);

        let state = reduce_tracking(state, &resolved("FH000000", None));
        assert_eq!(
            state,
            TrackingState::NotFound {
                order_id: "FH000000".to_string()
            }
        );
    }

    #[test]
    fn test_record_for_another_id_keeps_loading() {
        let registry = OrderRegistry::mock();
        let state = reduce_tracking(TrackingState::Idle, &submit("FH000000"));
        let wrong = registry.get("FH789012").cloned();
        let state = reduce_tracking(state, &resolved("FH000000", wrong));
        assert!(state.is_loading());
    }

    #[test]
    fn test_reset() {
        let loading = reduce_tracking(TrackingState::Idle, &submit("FH1"));
        assert_eq!(reduce_tracking(loading, &TrackingAction::Reset), TrackingState::Idle);
    }
}
