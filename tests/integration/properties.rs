// tests/integration/properties.rs
use proptest::prelude::*;

use crate::common::{TempWorkspace, linecounter};

/// Parses `<path>: <n> lines` rows and the trailing total.
fn parse_report(stdout: &str) -> (Vec<(String, usize)>, usize) {
    let mut rows = Vec::new();
    let mut total = None;
    for line in stdout.lines() {
        if let Some(n) = line.strip_prefix("Total lines: ") {
            total = Some(n.parse().unwrap());
        } else {
            let (path, rest) = line.rsplit_once(": ").unwrap();
            let n = rest.strip_suffix(" lines").unwrap().parse().unwrap();
            rows.push((path.to_string(), n));
        }
    }
    (rows, total.expect("report must end with a total"))
}

fn file_plan() -> impl Strategy<Value = Vec<(u8, bool, usize)>> {
    // (subdirectory index, matches extension, line count)
    prop::collection::vec((0u8..3, any::<bool>(), 0usize..40), 0..12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn report_is_sorted_complete_and_sums(plan in file_plan(), exclude_first in any::<bool>()) {
        let ws = TempWorkspace::new("prop");
        let mut expected = Vec::new();
        for (i, (dir, matches, lines)) in plan.iter().enumerate() {
            let ext = if *matches { "ext" } else { "txt" };
            let rel = format!("d{dir}/f{i}.{ext}");
            let path = ws.create_lines(&rel, *lines);
            if *matches && !(exclude_first && i == 0) {
                expected.push((path.display().to_string(), *lines));
            }
        }

        let mut cmd = linecounter();
        cmd.arg("--dir").arg(ws.path()).args(["--ext", "ext"]);
        if exclude_first {
            cmd.args(["--exclude", "f0.ext"]);
        }
        let output = cmd.output().unwrap();
        prop_assert!(output.status.success());

        let (rows, total) = parse_report(&String::from_utf8(output.stdout).unwrap());

        prop_assert_eq!(total, rows.iter().map(|(_, n)| n).sum::<usize>());
        for pair in rows.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }

        let mut got = rows.clone();
        got.sort();
        expected.sort();
        prop_assert_eq!(got, expected);
    }
}
