// Shared test helpers: write real .xlsx exports shaped like the two report generators' output.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

#[derive(Debug, Clone)]
pub enum V {
    S(&'static str),
    N(f64),
    /// Native date cell ("yyyy-mm-dd hh:mm:ss" text parsed by the writer).
    D(&'static str),
    Blank,
}

pub fn write_workbook(path: &Path, rows: &[Vec<V>]) {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");
    let sheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, v) in row.iter().enumerate() {
            let (r, c) = (r as u32, c as u16);
            match v {
                V::S(s) => {
                    sheet.write_string(r, c, *s).unwrap();
                }
                V::N(n) => {
                    sheet.write_number(r, c, *n).unwrap();
                }
                V::D(s) => {
                    let dt = ExcelDateTime::parse_from_str(s).unwrap();
                    sheet.write_datetime_with_format(r, c, &dt, &date_format).unwrap();
                }
                V::Blank => {}
            }
        }
    }
    workbook.save(path).unwrap();
}

/// Five preamble rows and the header row the alarm exporter writes.
pub fn alarm_preamble() -> Vec<Vec<V>> {
    vec![
        vec![V::S("Alarm Report")],
        vec![V::S("Generated: 2024-03-06 09:00")],
        vec![V::S("Filter: All Nodes")],
        vec![],
        vec![V::S("Severity: Any")],
        vec![
            V::Blank,
            V::Blank,
            V::Blank,
            V::S("Severity"),
            V::Blank,
            V::S("Clear Time"),
            V::Blank,
            V::S("Duration"),
            V::S("Description"),
            V::S("Host Name"),
        ],
    ]
}

/// One alarm data row: serial, ip, alias, severity, event, clear time, alarm time, extras.
pub fn alarm_row(serial: f64, ip: &'static str, alias: &'static str, time: V) -> Vec<V> {
    vec![
        V::N(serial),
        V::S(ip),
        V::S(alias),
        V::S("Major"),
        V::S("Node Down"),
        V::S("2024-03-05 23:59:00"),
        time,
        V::S("00:05:00"),
        V::S("ICMP timeout"),
        V::S("host"),
    ]
}

/// Header row and five summary rows the availability exporter writes.
pub fn availability_preamble() -> Vec<Vec<V>> {
    vec![
        vec![
            V::Blank,
            V::Blank,
            V::Blank,
            V::Blank,
            V::Blank,
            V::Blank,
            V::Blank,
            V::S("Node Availability Report"),
        ],
        vec![V::S("From"), V::S("2024-03-01")],
        vec![V::S("To"), V::S("2024-03-06")],
        vec![V::S("Group"), V::S("All")],
        vec![],
        vec![
            V::S("Node Alias"),
            V::S("IP Address"),
            V::S("Type"),
            V::S("Group"),
            V::S("Availability(%)"),
            V::S("Latency(msec)"),
            V::S("Packet Loss(%)"),
        ],
    ]
}

pub fn availability_row(alias: &'static str, ip: &'static str, avail: V, latency: V, loss: V) -> Vec<V> {
    vec![
        V::S(alias),
        V::S(ip),
        V::S("Router"),
        V::S("Core"),
        avail,
        latency,
        loss,
    ]
}

pub fn write_alarm_log(dir: &Path, name: &str, rows: Vec<Vec<V>>) -> PathBuf {
    let mut all = alarm_preamble();
    all.extend(rows);
    let path = dir.join(name);
    write_workbook(&path, &all);
    path
}

pub fn write_availability_report(dir: &Path, name: &str, rows: Vec<Vec<V>>) -> PathBuf {
    let mut all = availability_preamble();
    all.extend(rows);
    let path = dir.join(name);
    write_workbook(&path, &all);
    path
}

/// Alarm log + availability report covering matched, unmatched and duplicate-timestamp cases.
pub fn write_sample_exports(dir: &Path) -> (PathBuf, PathBuf) {
    let alarms = write_alarm_log(
        dir,
        "Alarm_Report_2024-03-06.xlsx",
        vec![
            alarm_row(1.0, "10.0.0.1", "core-1", V::S("2024-03-05 10:00:00")),
            alarm_row(2.0, "10.0.0.1", "core-1", V::S("2024-03-05 10:00:00")),
            alarm_row(3.0, "10.0.0.1", "core-1", V::D("2024-03-04 08:15:00")),
            alarm_row(4.0, "10.0.0.2", "edge-2", V::S("2024-03-01 12:00:00")),
            alarm_row(5.0, "10.0.0.9", "orphan-9", V::S("2024-03-02 12:00:00")),
            {
                let mut blank_alias = alarm_row(6.0, "10.0.0.3", "-", V::S("2024-03-02 12:00:00"));
                blank_alias[2] = V::Blank;
                blank_alias
            },
            alarm_row(7.0, "10.0.0.3", "edge-3", V::S("yesterday")),
            alarm_row(8.0, "10.0.0.3", "edge-3", V::Blank),
        ],
    );
    let availability = write_availability_report(
        dir,
        "Availability_Report_2024-03-06.xlsx",
        vec![
            availability_row("core-1", "10.0.0.1", V::N(99.5), V::N(12.0), V::N(0.0)),
            availability_row("edge-2", "10.0.0.2", V::S("97.25"), V::S("40"), V::S("1.5")),
            availability_row("edge-3", "10.0.0.3", V::S("N/A"), V::N(5.0), V::N(0.0)),
        ],
    );
    (alarms, availability)
}

pub fn config_toml(downloads_path: &Path) -> String {
    format!(
        r#"
[server]
port = 8050
host = "127.0.0.1"

[paths]
downloads_path = "{}"

[patterns]
file1_pattern = "Alarm_Report"
file2_pattern = "Availability_Report"
"#,
        downloads_path.display()
    )
}
