//! Scripted end-to-end sessions against on-disk datasets.

use std::fs;
use std::io::Cursor;

use bikeshare_cli::dataset::{FALLBACK_NOTICE, choose_dataset};
use bikeshare_cli::filter::apply_filter;
use bikeshare_cli::report::{NO_TRIPS, page_sample, print_summary};
use bikeshare_cli::{Console, SessionConfig, SessionError, TYPO_NOTICE, run_round, run_session};
use bikeshare_ingest::{DataLocations, IngestError, read_trip_csv};
use bikeshare_model::City;
use bikeshare_transform::temporal::{TimePart, time_parts};
use proptest::prelude::*;
use tempfile::TempDir;

type ScriptedConsole = Console<Cursor<String>, Vec<u8>>;

fn console(script: &str) -> ScriptedConsole {
    Console::new(Cursor::new(script.to_string()), Vec::new())
}

fn output(console: ScriptedConsole) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

/// Chicago trips: months 1-6, March dominated by Monday 17:xx departures.
fn chicago_csv() -> String {
    let mut csv = String::from("Start Time,End Time,Trip Duration,User Type,Gender,Birth Year\n");
    let rows = [
        ("2017-01-02 08:05:00", "2017-01-02 08:25:00", "Subscriber", "Male", "1985"),
        ("2017-02-07 09:00:00", "2017-02-07 09:12:00", "Customer", "", ""),
        ("2017-03-06 17:10:00", "2017-03-06 18:05:00", "Subscriber", "Female", "1990"),
        ("2017-03-13 17:20:00", "2017-03-13 18:10:00", "Subscriber", "Male", "1979"),
        ("2017-03-20 17:40:00", "2017-03-20 18:02:00", "Customer", "Female", "1992"),
        ("2017-03-23 07:00:00", "2017-03-23 07:30:00", "Subscriber", "Male", "1968"),
        ("2017-04-11 12:00:00", "2017-04-11 12:40:00", "Subscriber", "Female", "2000"),
        ("2017-05-16 13:00:00", "2017-05-16 13:20:00", "Customer", "Male", "1995"),
        ("2017-06-21 18:00:00", "2017-06-21 18:30:00", "Subscriber", "Female", "1988"),
        ("2017-06-22 19:00:00", "2017-06-22 19:45:00", "Subscriber", "Male", "1977"),
        ("2017-06-23 20:00:00", "2017-06-23 20:10:00", "Customer", "Female", "1999"),
        ("2017-06-24 21:00:00", "2017-06-24 21:05:00", "Subscriber", "Male", "1983"),
    ];
    for (start, end, user_type, gender, birth_year) in rows {
        csv.push_str(&format!("{start},{end},600,{user_type},{gender},{birth_year}\n"));
    }
    csv
}

const WASHINGTON_CSV: &str = "Start Time,End Time,Trip Duration,User Type\n\
2017-01-01 00:00:36,2017-01-01 00:06:32,356.0,Customer\n\
2017-01-02 08:05:43,2017-01-02 08:13:03,440.0,Subscriber\n\
2017-02-06 08:30:00,2017-02-06 08:50:00,1200.0,Subscriber\n";

fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(City::Chicago.file_name()), chicago_csv()).unwrap();
    fs::write(dir.path().join(City::Washington.file_name()), WASHINGTON_CSV).unwrap();
    dir
}

fn locations(dir: &TempDir) -> DataLocations {
    DataLocations::new(dir.path()).with_fallback(None)
}

#[test]
fn chicago_month_filter_summarizes_march() {
    let dir = data_dir();
    let mut console = console("c\nno\nm\n3\nno\n");

    let filtered = run_round(&mut console, &locations(&dir)).unwrap();

    assert_eq!(filtered.height(), 4);
    assert!(filtered.column("Month").is_err());
    let months = time_parts(&filtered, "Start Time", TimePart::Month).unwrap();
    assert!(months.iter().all(|month| *month == Some(3)));

    let text = output(console);
    assert!(text.contains("Choose a month from the list: [1, 2, 3, 4, 5, 6]"));
    assert!(text.contains("Most Popular Start Hour: 17\n"));
    assert!(text.contains("Most Popular End Hour: 18\n"));
    assert!(text.contains("Most Popular day for traveling: Monday\n"));
    assert!(text.contains("Most Popular month for traveling: March\n"));
    assert!(!text.contains(TYPO_NOTICE));
}

#[test]
fn washington_menu_rejects_gender() {
    let dir = data_dir();
    let mut console = console("w\nn\ngender\nG\nut\nsubscriber\nn\n");

    let filtered = run_round(&mut console, &locations(&dir)).unwrap();

    assert_eq!(filtered.height(), 2);
    assert!(filtered.column("User Type").is_err());
    let text = output(console);
    assert!(text.contains("Choose your filter: No Filter, Month, Day of Week, User Type."));
    assert!(!text.contains("Gender"));
    assert_eq!(text.matches(TYPO_NOTICE).count(), 2);
    assert!(text.contains("Choose a user type from the following list: [Customer, Subscriber]"));
}

#[test]
fn chicago_gender_filter_uses_filled_values() {
    let dir = data_dir();
    let dataset = choose_dataset(&mut console("chicago\n"), &locations(&dir)).unwrap();
    assert_eq!(dataset.city, City::Chicago);

    let mut console = console("gender\nunknown\n");
    let filtered = apply_filter(&mut console, &dataset.frame, dataset.city).unwrap();

    assert_eq!(filtered.height(), 1);
    assert!(filtered.column("Gender").is_err());
    assert!(output(console).contains("[Male, Unknown, Female]"));
}

#[test]
fn day_of_week_filter_matches_weekday() {
    let dir = data_dir();
    let frame = read_trip_csv(&dir.path().join("chicago.csv")).unwrap();
    let mut console = console("DOW\n7\n0\n");

    let filtered = apply_filter(&mut console, &frame, City::Chicago).unwrap();

    let days = time_parts(&filtered, "Start Time", TimePart::Weekday).unwrap();
    assert_eq!(days.len(), 4);
    assert!(days.iter().all(|day| *day == Some(0)));
    assert!(filtered.column("Day of Week").is_err());
    let text = output(console);
    assert!(text.contains("With Monday=0, Sunday=6"));
    assert_eq!(text.matches(TYPO_NOTICE).count(), 1);
}

#[test]
fn unobserved_month_is_rejected() {
    let dir = data_dir();
    let frame = read_trip_csv(&dir.path().join("washington.csv")).unwrap();
    let mut console = console("month\n3\n2\n");

    let filtered = apply_filter(&mut console, &frame, City::Washington).unwrap();

    assert_eq!(filtered.height(), 1);
    assert_eq!(output(console).matches(TYPO_NOTICE).count(), 1);
}

#[test]
fn no_filter_returns_identical_frame() {
    let dir = data_dir();
    let frame = read_trip_csv(&dir.path().join("chicago.csv")).unwrap();
    let mut console = console("NF\n");

    let filtered = apply_filter(&mut console, &frame, City::Chicago).unwrap();

    assert!(filtered.equals_missing(&frame));
    assert_eq!(filtered.get_column_names(), frame.get_column_names());
}

#[test]
fn pager_grows_by_five_and_caps_at_row_count() {
    let dir = data_dir();
    let frame = read_trip_csv(&dir.path().join("chicago.csv")).unwrap();
    let mut console = console("yes\ny\nYES\nyes\nno\n");

    let shown = page_sample(&mut console, &frame, "").unwrap();

    assert_eq!(shown, vec![5, 10, 12, 12]);
    let text = output(console);
    assert!(text.contains("Would you like to see a sample of the city data table?"));
    assert_eq!(
        text.matches("Would you like to show more rows of this sample?").count(),
        4
    );
}

#[test]
fn pager_stops_on_first_no() {
    let dir = data_dir();
    let frame = read_trip_csv(&dir.path().join("washington.csv")).unwrap();
    let mut console = console("n\n");

    let shown = page_sample(&mut console, &frame, "new").unwrap();

    assert!(shown.is_empty());
    let text = output(console);
    assert!(text.contains("sample of the city data new table?"));
    assert!(!text.contains("show more rows"));
}

#[test]
fn empty_frame_reports_no_trips() {
    let dir = data_dir();
    let frame = read_trip_csv(&dir.path().join("washington.csv")).unwrap();
    let mut console = console("");

    print_summary(&mut console, &frame.head(Some(0))).unwrap();

    assert_eq!(output(console), format!("{NO_TRIPS}\n"));
}

#[test]
fn full_session_restarts_then_rates() {
    let dir = data_dir();
    let script = "w\nno\nnf\nno\ny\nnyc\nnyc\n";
    let mut console = console(script);
    let config = SessionConfig {
        locations: DataLocations::new(dir.path()).with_fallback(None),
    };

    // New York City is not present in the data directory.
    let result = run_session(&mut console, &config);
    assert!(matches!(
        result,
        Err(SessionError::Ingest(IngestError::FileNotFound { .. }))
    ));

    let mut console = self::console("washington\nno\nnf\nno\nno\n4\n");
    run_session(&mut console, &config).unwrap();
    let text = output(console);
    assert!(text.contains("Most Popular month for traveling: January"));
    assert!(text.contains("Would you like to restart? Enter Yes or No."));
    assert!(text.contains("We also find you AWESOME (^_-)"));
}

#[test]
fn fallback_location_is_announced() {
    let primary = TempDir::new().unwrap();
    let fallback = data_dir();
    let locations =
        DataLocations::new(primary.path()).with_fallback(Some(fallback.path().to_path_buf()));
    let mut console = console("W\n");

    let dataset = choose_dataset(&mut console, &locations).unwrap();

    assert_eq!(dataset.path, fallback.path().join("washington.csv"));
    assert!(output(console).contains(FALLBACK_NOTICE));
}

#[test]
fn quit_at_filter_prompt_ends_round() {
    let dir = data_dir();
    let mut console = console("c\nno\nQuit\n");
    let result = run_round(&mut console, &locations(&dir));
    assert!(matches!(result, Err(SessionError::Quit)));
}

proptest! {
    #[test]
    fn quit_keywords_end_any_prompt(
        index in 0usize..5,
        mask in proptest::collection::vec(any::<bool>(), 6),
        prompt_depth in 0usize..3,
    ) {
        let keyword: String = bikeshare_cli::QUIT_KEYWORDS[index]
            .chars()
            .zip(mask.iter().cycle())
            .map(|(ch, upper)| if *upper { ch.to_ascii_uppercase() } else { ch })
            .collect();
        // Answer the first prompts normally, then quit.
        let answers = ["washington", "no", "nf"];
        let mut script: String = answers[..prompt_depth]
            .iter()
            .map(|answer| format!("{answer}\n"))
            .collect();
        script.push_str(&keyword);
        script.push('\n');

        let dir = data_dir();
        let mut console = console(&script);
        let result = run_round(&mut console, &locations(&dir));
        prop_assert!(matches!(result, Err(SessionError::Quit)));
    }
}
