//! Property-based tests for prompt normalization, request phases,
//! calculation history and the geo/IMO helpers.

use berthguard::core::DeactivationPhase;
use berthguard::dialog::{normalize, DialogOutcome};
use berthguard::effects::DeactivationRequest;
use berthguard::geo::{distance_nm, Calculation, Coordinate, EARTH_RADIUS_NM};
use berthguard::history::{HistoryRepository, InMemoryHistoryRepository};
use berthguard::visit::is_valid_imo;
use chrono::Utc;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_phase()(variant in 0..5u8) -> DeactivationPhase {
        DeactivationPhase::ALL[usize::from(variant)]
    }
}

prop_compose! {
    fn arbitrary_coordinate()(lat in -90.0..=90.0f64, lon in -180.0..=180.0f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn only_explicit_confirm_leaves(result in proptest::option::of(any::<bool>())) {
        prop_assert_eq!(normalize(result), result == Some(true));
        prop_assert_eq!(
            DialogOutcome::from_result(result).is_conclusive(),
            result.is_some()
        );
    }

    #[test]
    fn request_phase_only_moves_along_legal_edges(
        steps in prop::collection::vec(arbitrary_phase(), 0..12)
    ) {
        let mut request = DeactivationRequest::new("/visits");

        for next in steps {
            let before = request.phase();
            let moved = request.advance(next).is_ok();
            prop_assert_eq!(moved, before.can_advance_to(next));
            prop_assert_eq!(request.phase(), if moved { next } else { before });
        }

        let path = request.trail().get_path();
        for pair in path.windows(2) {
            prop_assert!(pair[0].can_advance_to(*pair[1]));
        }
        prop_assert!(request.trail().len() <= 3);
    }

    #[test]
    fn distance_is_symmetric_and_bounded(
        a in arbitrary_coordinate(),
        b in arbitrary_coordinate()
    ) {
        let ab = distance_nm(a, b);
        let ba = distance_nm(b, a);
        prop_assert!(ab >= 0.0);
        prop_assert!(ab <= std::f64::consts::PI * EARTH_RADIUS_NM + 1e-6);
        prop_assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn formatted_position_names_hemispheres(c in arbitrary_coordinate()) {
        let text = c.format_dm();
        let (lat, lon) = text.split_once(' ').unwrap();
        prop_assert!(lat.ends_with('N') || lat.ends_with('S'));
        prop_assert!(lon.ends_with('E') || lon.ends_with('W'));
    }

    #[test]
    fn imo_accepts_exactly_one_check_digit(prefix in prop::collection::vec(0..10u32, 6)) {
        let weighted: u32 = prefix.iter().zip((2..=7u32).rev()).map(|(d, w)| d * w).sum();
        let stem: String = prefix.iter().map(|d| d.to_string()).collect();

        for check in 0..10u32 {
            let imo = format!("{stem}{check}");
            prop_assert_eq!(is_valid_imo(&imo), check == weighted % 10);
        }
    }

    #[test]
    fn history_query_is_newest_first_and_bounded(
        appends in 0..30usize,
        limit in 0..40usize,
        retain in proptest::option::of(1..20usize)
    ) {
        let repo = match retain {
            Some(max) => InMemoryHistoryRepository::with_retention(max),
            None => InMemoryHistoryRepository::new(),
        };
        let origin = Coordinate::new(0.0, 0.0).unwrap();

        let recent = runtime().block_on(async {
            for i in 0..appends {
                let to = Coordinate::new(0.0, i as f64 / 10.0).unwrap();
                let calc = Calculation::compute(origin, to, 12.0, Utc::now()).unwrap();
                repo.append(calc).await.unwrap();
            }
            repo.query_recent(limit).await.unwrap()
        });

        let stored = retain.map_or(appends, |max| appends.min(max));
        prop_assert_eq!(recent.len(), stored.min(limit));
        prop_assert!(recent.windows(2).all(|p| p[0].recorded_at > p[1].recorded_at));
    }
}
