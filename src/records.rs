//! Flat-file catalog and schedule records.
//!
//! Reads course catalogs and writes schedule exports as plain comma-delimited
//! text, one record per line.
//!
//! # Catalog Format
//!
//! `name,title,section,credits,instructor_id,days[,start,end]` — the two
//! trailing time fields must be present exactly when `days` is not the
//! arranged sentinel. A line with a missing field, a malformed number, or a
//! failing course validation is skipped with a warning; so is any duplicate
//! (name, section) after the first. Partial catalogs load fine.
//!
//! # Export Format
//!
//! One line per scheduled activity in schedule order, each being the
//! variant's `Display` form. No header, no trailer.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::warn;

use crate::models::{Activity, Course};

/// Field count for an arranged catalog line.
const ARRANGED_FIELDS: usize = 6;
/// Field count for a timed catalog line.
const TIMED_FIELDS: usize = 8;

/// Reads a course catalog from a file.
///
/// Invalid lines and duplicate (name, section) entries are skipped, keeping
/// the first occurrence; the result holds every line that parsed and
/// validated.
///
/// # Errors
///
/// Only if the file itself cannot be opened or read.
pub fn read_catalog(path: impl AsRef<Path>) -> io::Result<Vec<Course>> {
    let reader = BufReader::new(File::open(path)?);
    let mut courses: Vec<Course> = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(course) = parse_course(&line) else {
            warn!(line = number + 1, "skipping invalid catalog line");
            continue;
        };
        let duplicate = courses
            .iter()
            .any(|c| c.name() == course.name() && c.section() == course.section());
        if duplicate {
            warn!(
                line = number + 1,
                name = course.name(),
                section = course.section(),
                "skipping duplicate catalog line"
            );
            continue;
        }
        courses.push(course);
    }

    Ok(courses)
}

/// Parses one catalog line, or `None` if it is malformed or fails validation.
fn parse_course(line: &str) -> Option<Course> {
    let fields: Vec<&str> = line.split(',').collect();

    // The days field decides the expected arity: arranged lines must not
    // carry time fields, timed lines must carry both.
    let days = *fields.get(5)?;
    if days.contains('A') {
        if fields.len() != ARRANGED_FIELDS {
            return None;
        }
        let credits: u8 = fields[3].parse().ok()?;
        Course::new(fields[0], fields[1], fields[2], credits, fields[4], days, 0, 0).ok()
    } else {
        if fields.len() != TIMED_FIELDS {
            return None;
        }
        let credits: u8 = fields[3].parse().ok()?;
        let start: u16 = fields[6].parse().ok()?;
        let end: u16 = fields[7].parse().ok()?;
        Course::new(fields[0], fields[1], fields[2], credits, fields[4], days, start, end).ok()
    }
}

/// Writes a schedule to a file, one serialized activity per line.
///
/// # Errors
///
/// Any I/O failure while creating or writing the file.
pub fn write_schedule(path: impl AsRef<Path>, schedule: &[Activity]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for activity in schedule {
        writeln!(writer, "{activity}")?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Event;

    fn write_lines(dir: &tempfile::TempDir, name: &str, lines: &[&str]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, lines.join("\n")).unwrap();
        path
    }

    #[test]
    fn test_read_valid_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_lines(
            &dir,
            "catalog.txt",
            &[
                "CSC216,SW Eng,001,3,sheckman,MW,1330,1445",
                "CSC226,Discrete Math,001,3,tmbarnes,MWF,935,1025",
                "CSC491,Research,601,2,dbsturgi,A",
            ],
        );

        let catalog = read_catalog(path).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[0].name(), "CSC216");
        assert!(catalog[2].meeting().is_arranged());
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_lines(
            &dir,
            "catalog.txt",
            &[
                "CSC216,SW Eng,001,3,sheckman,MW,1330,1445",
                // Missing time fields on a timed line
                "CSC226,Discrete Math,001,3,tmbarnes,MWF",
                // Non-integer credits
                "CSC230,C Tools,001,three,dbsturgi,MW,1145,1300",
                // Arranged line carrying time fields
                "CSC491,Research,601,2,dbsturgi,A,900,1000",
                // Validation failure: bad section
                "CSC316,Data Structures,1,3,jtking,MW,1330,1445",
                "",
            ],
        );

        let catalog = read_catalog(path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].name(), "CSC216");
    }

    #[test]
    fn test_duplicate_name_section_keeps_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_lines(
            &dir,
            "catalog.txt",
            &[
                "CSC216,SW Eng,001,3,sheckman,MW,1330,1445",
                "CSC216,SW Eng,001,3,jep,TH,1330,1445",
                "CSC216,SW Eng,002,3,sheckman,TH,1330,1445",
            ],
        );

        let catalog = read_catalog(path).unwrap();
        assert_eq!(catalog.len(), 2);
        // First occurrence of (CSC216, 001) wins
        assert_eq!(catalog[0].instructor_id(), "sheckman");
        assert_eq!(catalog[1].section(), "002");
    }

    #[test]
    fn test_read_missing_file() {
        assert!(read_catalog("no/such/catalog.txt").is_err());
    }

    #[test]
    fn test_write_schedule() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.txt");

        let schedule = vec![
            Course::new("CSC216", "SW Eng", "001", 3, "sheckman", "MW", 1330, 1445)
                .unwrap()
                .into(),
            Event::new("Study", "MTWHF", 1800, 1900, 3, "group study")
                .unwrap()
                .into(),
        ];
        write_schedule(&path, &schedule).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "CSC216,SW Eng,001,3,sheckman,MW,1330,1445\nStudy,MTWHF,1800,1900,3,group study\n"
        );
    }

    #[test]
    fn test_course_round_trip() {
        // Serializing a course then re-reading it yields an equal course
        let course =
            Course::new("CSC216", "SW Eng", "001", 3, "sheckman", "MW", 1330, 1445).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round_trip.txt");
        write_schedule(&path, &[course.clone().into()]).unwrap();

        let catalog = read_catalog(&path).unwrap();
        assert_eq!(catalog, vec![course]);
    }

    #[test]
    fn test_arranged_round_trip() {
        let course = Course::arranged("CSC491", "Research", "601", 2, "dbsturgi").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round_trip.txt");
        write_schedule(&path, &[course.clone().into()]).unwrap();

        let catalog = read_catalog(&path).unwrap();
        assert_eq!(catalog, vec![course]);
    }
}
