#[cfg(test)]
mod tests {
    use crate::api::{Course, CourseId, Preferences, TimeBlock};
    use crate::services::scoring::{lucky_day, score_catalog};

    fn course(id: &str, credits: u32, blocks: &[(u8, f64, f64)]) -> Course {
        Course::new(
            id,
            credits,
            blocks
                .iter()
                .map(|&(d, s, e)| TimeBlock::new(d, s, e))
                .collect(),
        )
    }

    #[test]
    fn test_lucky_day_cycles_over_weekdays() {
        assert_eq!(lucky_day(10), 0);
        assert_eq!(lucky_day(20), 0);
        assert_eq!(lucky_day(23), 3);
        assert_eq!(lucky_day(34), 4);
    }

    #[test]
    fn test_same_seed_reproduces_scores() {
        let catalog = vec![
            course("A", 3, &[(0, 9.0, 10.0)]),
            course("B", 2, &[(1, 13.0, 15.0)]),
            course("C", 4, &[]),
        ];
        let prefs = Preferences::default();
        let first = score_catalog(&catalog, &[], &prefs, 42);
        let second = score_catalog(&catalog, &[], &prefs, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_shift_scores() {
        let catalog: Vec<Course> = (0..16u8)
            .map(|i| course(&format!("C{}", i), 3, &[(i % 5, 9.0, 10.0)]))
            .collect();
        let prefs = Preferences::default();
        let a = score_catalog(&catalog, &[], &prefs, 10);
        let b = score_catalog(&catalog, &[], &prefs, 20);
        assert_ne!(a, b);
    }

    #[test]
    fn test_fixed_course_has_no_jitter() {
        let catalog = vec![course("A", 3, &[(0, 12.0, 13.0)])];
        let fixed = vec![CourseId::from("A")];
        let prefs = Preferences::default();
        for seed in [10, 20, 30, 13] {
            let scores = score_catalog(&catalog, &fixed, &prefs, seed);
            let lucky_bonus = if lucky_day(seed) == 0 { 20 } else { 0 };
            assert_eq!(scores[0], 30 + lucky_bonus);
        }
    }

    #[test]
    fn test_jitter_stays_in_bounds() {
        let catalog = vec![course("A", 0, &[])];
        let prefs = Preferences::default();
        for seed in 0..200 {
            let scores = score_catalog(&catalog, &[], &prefs, seed);
            assert!((-30..=30).contains(&scores[0]), "seed {}: {}", seed, scores[0]);
        }
    }

    #[test]
    fn test_lucky_day_bonus_per_block() {
        // Seed 10 favors Monday; two Monday blocks earn the bonus twice
        let catalog = vec![course("A", 3, &[(0, 9.0, 10.0), (0, 14.0, 15.0)])];
        let fixed = vec![CourseId::from("A")];
        let scores = score_catalog(&catalog, &fixed, &Preferences::default(), 10);
        assert_eq!(scores[0], 30 + 20 + 20);
    }

    #[test]
    fn test_avoid_morning_penalty_per_block() {
        let catalog = vec![course("A", 3, &[(1, 9.0, 10.0), (2, 10.5, 12.0)])];
        let fixed = vec![CourseId::from("A")];
        let prefs = Preferences {
            avoid_morning: true,
            ..Preferences::default()
        };
        // Both blocks start before 11:00
        let scores = score_catalog(&catalog, &fixed, &prefs, 13);
        assert_eq!(scores[0], 30 - 50 - 50);
    }

    #[test]
    fn test_avoid_evening_penalty_per_block() {
        let catalog = vec![course("A", 3, &[(1, 17.0, 19.0), (2, 12.0, 13.0)])];
        let fixed = vec![CourseId::from("A")];
        let prefs = Preferences {
            avoid_evening: true,
            ..Preferences::default()
        };
        let scores = score_catalog(&catalog, &fixed, &prefs, 13);
        assert_eq!(scores[0], 30 - 50);
    }

    #[test]
    fn test_long_break_penalty_applies_once() {
        // Both blocks are extreme (before 10:00 / after 17:00) but the
        // penalty is per course, not per block
        let catalog = vec![course("A", 3, &[(1, 8.0, 9.0), (2, 16.0, 18.5)])];
        let fixed = vec![CourseId::from("A")];
        let prefs = Preferences {
            prefer_long_break: true,
            ..Preferences::default()
        };
        let scores = score_catalog(&catalog, &fixed, &prefs, 13);
        assert_eq!(scores[0], 30 - 80);
    }

    #[test]
    fn test_preferred_day_penalty_per_block() {
        let catalog = vec![course("A", 3, &[(4, 9.0, 10.0), (4, 13.0, 14.0)])];
        let fixed = vec![CourseId::from("A")];
        let prefs = Preferences {
            preferred_days: vec!["Fri".to_string()],
            ..Preferences::default()
        };
        let scores = score_catalog(&catalog, &fixed, &prefs, 13);
        assert_eq!(scores[0], 30 - 100 - 100);
    }

    #[test]
    fn test_unknown_day_labels_are_ignored() {
        let catalog = vec![course("A", 3, &[(4, 9.0, 10.0)])];
        let fixed = vec![CourseId::from("A")];
        let prefs = Preferences {
            preferred_days: vec!["Funday".to_string()],
            ..Preferences::default()
        };
        let scores = score_catalog(&catalog, &fixed, &prefs, 13);
        assert_eq!(scores[0], 30);
    }

    #[test]
    fn test_blockless_course_gets_base_and_jitter_only() {
        let catalog = vec![course("A", 2, &[])];
        let prefs = Preferences {
            avoid_morning: true,
            avoid_evening: true,
            prefer_long_break: true,
            preferred_days: vec!["Mon".to_string()],
            ..Preferences::default()
        };
        let scores = score_catalog(&catalog, &[], &prefs, 77);
        assert!((20 - 30..=20 + 30).contains(&scores[0]));
    }

    #[test]
    fn test_fixed_courses_consume_no_draws() {
        // With A fixed, the remaining courses consume the same draw
        // sequence as a catalog that never contained A
        let full = vec![
            course("A", 3, &[]),
            course("B", 3, &[]),
            course("C", 3, &[]),
            course("D", 3, &[]),
        ];
        let prefs = Preferences::default();
        let with_fixed = score_catalog(&full, &[CourseId::from("A")], &prefs, 99);
        let tail = vec![
            course("B", 3, &[]),
            course("C", 3, &[]),
            course("D", 3, &[]),
        ];
        let tail_alone = score_catalog(&tail, &[], &prefs, 99);
        assert_eq!(&with_fixed[1..], &tail_alone[..]);
    }
}
