//! Property-based tests for chatlens.
//!
//! These tests generate random transcripts to find edge cases.

use proptest::prelude::*;

use chatlens::config::{ParserConfig, WordCloudConfig};
use chatlens::core::{
    Scope, StopWords, WordFilter, create_wordcloud, fetch_stats, most_busy_users, sender_list,
};
use chatlens::message::HourBucket;
use chatlens::parsing::{split_entries, split_sender};
use chatlens::{MessageRecord, Sender};

const MEDIA: &str = "<Media omitted>";

/// One transcript line: a valid stamp, then either `sender: body` or a
/// system notice.
fn arb_entry() -> impl Strategy<Value = String> {
    (
        1u32..=28,
        1u32..=12,
        prop::bool::ANY,
        0u32..24,
        0u32..60,
        prop::sample::select(vec![
            Some("Alice"),
            Some("Bob"),
            Some("Иван"),
            Some("+91 98765 43210"),
            None,
        ]),
        // Fast: select from predefined bodies
        prop::sample::select(vec![
            "Hello",
            "Hi there!",
            "see https://example.com and www.example.org",
            "<Media omitted>",
            "Привет мир",
            "",
            "multi\nline body",
            "ratio: 3:4",
            "🎉🔥💀 emoji",
        ]),
    )
        .prop_map(|(day, month, long_year, hour, minute, sender, body)| {
            let year = if long_year { "2023" } else { "23" };
            let prefix = format!("{day}/{month}/{year}, {hour}:{minute:02} - ");
            match sender {
                Some(name) => format!("{prefix}{name}: {body}\n"),
                None => format!("{prefix}Alice added Bob\n"),
            }
        })
}

fn arb_transcript(max_len: usize) -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["", "Messages are end-to-end encrypted.\n"]),
        prop::collection::vec(arb_entry(), 0..max_len),
    )
        .prop_map(|(preamble, entries)| format!("{preamble}{}", entries.concat()))
}

fn parse(raw: &str) -> Vec<MessageRecord> {
    chatlens::parse(raw).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSER PROPERTIES
    // ============================================

    /// Splitting never loses text
    #[test]
    fn split_reassembles_original(raw in arb_transcript(20)) {
        let split = split_entries(&raw, &ParserConfig::default()).unwrap();
        prop_assert_eq!(split.reassemble(), raw);
    }

    /// Arbitrary text splits cleanly too
    #[test]
    fn split_reassembles_arbitrary_text(raw in "\\PC{0,200}") {
        let split = split_entries(&raw, &ParserConfig::default()).unwrap();
        prop_assert_eq!(split.reassemble(), raw);
    }

    /// One record per stamp
    #[test]
    fn record_count_matches_stamps(entries in prop::collection::vec(arb_entry(), 0..20)) {
        let raw = entries.concat();
        prop_assert_eq!(parse(&raw).len(), entries.len());
    }

    /// Bodies never carry outer whitespace
    #[test]
    fn bodies_are_trimmed(raw in arb_transcript(20)) {
        for record in parse(&raw) {
            prop_assert_eq!(record.body(), record.body().trim());
        }
    }

    /// A non-blank prefix before ": " is always taken as the sender
    #[test]
    fn sender_split_takes_prefix(
        name in "[A-Za-z][A-Za-z ]{0,10}[A-Za-z]",
        body in "[a-z ]{0,20}",
    ) {
        let entry = format!("{name}: {body}");
        let (sender, rest) = split_sender(&entry);
        prop_assert_eq!(sender, Sender::user(name.trim()));
        prop_assert_eq!(rest, body.trim());
    }

    // ============================================
    // DERIVED FIELD PROPERTIES
    // ============================================

    /// Hour buckets are total and follow the label rule
    #[test]
    fn hour_bucket_labels(hour in 0u32..24) {
        let bucket = HourBucket::new(hour).unwrap();
        let expected = match hour {
            0 => "00-1".to_string(),
            23 => "23-00".to_string(),
            h => format!("{}-{}", h, h + 1),
        };
        prop_assert_eq!(bucket.as_str(), expected.as_str());
    }

    /// Out-of-range hours have no bucket
    #[test]
    fn hour_bucket_rejects_large_hours(hour in 24u32..1000) {
        prop_assert!(HourBucket::new(hour).is_none());
    }

    // ============================================
    // AGGREGATION PROPERTIES
    // ============================================

    /// Overall stats are the sum over every sender scope plus the sentinel
    #[test]
    fn overall_stats_is_sum_of_scopes(raw in arb_transcript(30)) {
        let records = parse(&raw);
        let overall = fetch_stats(&records, &Scope::Overall, MEDIA);

        let mut scopes: Vec<Scope> = sender_list(&records).into_iter().map(Scope::from).collect();
        scopes.push(Scope::from(Sender::GroupNotification));
        let summed = scopes
            .iter()
            .map(|scope| fetch_stats(&records, scope, MEDIA))
            .sum();

        prop_assert_eq!(overall, summed);
    }

    /// Shares over all senders add up to 100 within rounding
    #[test]
    fn busy_user_shares_sum_to_100(raw in arb_transcript(30)) {
        let records = parse(&raw);
        let busy = most_busy_users(&records, 5);

        if busy.shares.is_empty() {
            prop_assert!(records.iter().all(MessageRecord::is_system));
        } else {
            let total: f64 = busy.shares.iter().map(|s| s.percent).sum();
            prop_assert!((total - 100.0).abs() <= 0.01 * busy.shares.len() as f64);
        }
        prop_assert!(busy.top.len() <= 5);
    }

    /// Placed words never overlap and stay on the canvas
    #[test]
    fn wordcloud_has_no_overlaps(raw in arb_transcript(30), seed in 0u64..1000) {
        let records = parse(&raw);
        let stop_words = StopWords::empty();
        let filter = WordFilter::new(&stop_words);
        let config = WordCloudConfig::default().with_seed(seed);

        let cloud = create_wordcloud(&records, &Scope::Overall, &filter, &config);
        for (i, a) in cloud.words.iter().enumerate() {
            prop_assert!(a.x >= 0.0 && a.y >= 0.0);
            prop_assert!(a.x + a.width <= f64::from(cloud.width));
            prop_assert!(a.y + a.height <= f64::from(cloud.height));
            for b in &cloud.words[i + 1..] {
                prop_assert!(!a.overlaps(b));
            }
        }
    }

    /// Same config, same layout
    #[test]
    fn wordcloud_is_deterministic(raw in arb_transcript(20)) {
        let records = parse(&raw);
        let stop_words = StopWords::empty();
        let filter = WordFilter::new(&stop_words);
        let config = WordCloudConfig::default();

        let a = create_wordcloud(&records, &Scope::Overall, &filter, &config);
        let b = create_wordcloud(&records, &Scope::Overall, &filter, &config);
        prop_assert_eq!(a, b);
    }
}
