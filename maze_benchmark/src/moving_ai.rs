use crate::error::BenchmarkError;
use crate::maze::{FLOOR, WALL};
use csv::ReaderBuilder;
use grid_util::point::Point;
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// One tab separated row of a `.scen` file.
#[allow(unused)]
#[derive(Debug, Deserialize)]
struct ScenarioRecord {
    bucket: u32,
    file_name: String,
    w: u32,
    h: u32,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    distance: f64,
}

/// A start/end query from a `.scen` file. `distance` is the optimal octile (eight-neighbour)
/// length listed by the benchmark; it is kept for reference only and is not comparable with
/// the length of a four-neighbour path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scenario {
    pub start: Point,
    pub end: Point,
    pub distance: f64,
}

#[derive(Clone, Debug)]
pub struct Benchmark {
    pub name: String,
    pub map: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub scenarios: Vec<Scenario>,
}

fn parse_dimension(key: &str, value: &str) -> Result<usize, BenchmarkError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| BenchmarkError::MalformedMap(format!("could not parse {} '{}'", key, value)))
}

/// Parses a `.map` file: a header with `type`, `height` and `width` lines, a `map` line and then
/// one text row per grid row. `.`, `G` and `S` are passable, every other tile becomes [WALL].
pub fn parse_map(map_str: &str) -> Result<(Vec<u8>, usize, usize), BenchmarkError> {
    let mut lines = map_str.lines();
    let mut width = None;
    let mut height = None;
    for line in lines.by_ref() {
        let line = line.trim();
        if line == "map" {
            break;
        }
        match line.split_once(' ') {
            Some(("width", v)) => width = Some(parse_dimension("width", v)?),
            Some(("height", v)) => height = Some(parse_dimension("height", v)?),
            _ => {}
        }
    }
    let (width, height) = match (width, height) {
        (Some(w), Some(h)) => (w, h),
        _ => {
            return Err(BenchmarkError::MalformedMap(
                "header lacks width or height".to_owned(),
            ))
        }
    };

    let mut map = vec![WALL; width * height];
    let rows = lines.take(height).collect::<Vec<&str>>();
    if rows.len() < height {
        return Err(BenchmarkError::MalformedMap(format!(
            "expected {} rows, found {}",
            height,
            rows.len()
        )));
    }
    for (y, row) in rows.iter().enumerate() {
        let tiles = row.trim_end().as_bytes();
        if tiles.len() < width {
            return Err(BenchmarkError::MalformedMap(format!(
                "row {} has {} tiles, expected {}",
                y,
                tiles.len(),
                width
            )));
        }
        for (x, tile) in tiles.iter().take(width).enumerate() {
            if [b'.', b'G', b'S'].contains(tile) {
                map[y * width + x] = FLOOR;
            }
        }
    }
    Ok((map, width, height))
}

/// Parses a `.scen` file. The first line is a version header, the remaining lines are tab
/// separated records. Records pointing outside a `width` by `height` map are skipped.
pub fn parse_scenarios(
    scen_str: &str,
    width: usize,
    height: usize,
) -> Result<Vec<Scenario>, BenchmarkError> {
    let records = scen_str.split_once('\n').map_or("", |(_, rest)| rest);
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(records.as_bytes());

    let in_bounds = |p: &Point| {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < width && (p.y as usize) < height
    };
    let mut scenarios = Vec::new();
    for result in csv_reader.deserialize() {
        let record: ScenarioRecord = result?;
        let start = Point::new(record.x1, record.y1);
        let end = Point::new(record.x2, record.y2);
        if in_bounds(&start) && in_bounds(&end) {
            scenarios.push(Scenario {
                start,
                end,
                distance: record.distance,
            });
        } else {
            warn!(
                "Skipping scenario {} -> {} outside the {}x{} map",
                start, end, width, height
            );
        }
    }
    Ok(scenarios)
}

/// Lists the benchmarks below `root/maps` by their path relative to it without the `.map`
/// extension, for example `dao/arena`.
pub fn benchmark_names(root: &Path) -> Result<Vec<String>, BenchmarkError> {
    let maps = root.join("maps");
    let mut names = Vec::new();
    for entry in WalkDir::new(&maps) {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().map_or(true, |e| e != "map") {
            continue;
        }
        let name = path
            .strip_prefix(&maps)
            .ok()
            .and_then(|rel| rel.with_extension("").to_str().map(str::to_owned));
        if let Some(name) = name {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Reads `root/maps/<name>.map` and `root/scenarios/<name>.map.scen`.
pub fn load_benchmark(root: &Path, name: &str) -> Result<Benchmark, BenchmarkError> {
    let map_str = fs::read_to_string(root.join("maps").join(format!("{}.map", name)))?;
    let scen_str = fs::read_to_string(root.join("scenarios").join(format!("{}.map.scen", name)))?;
    let (map, width, height) = parse_map(&map_str)?;
    let scenarios = parse_scenarios(&scen_str, width, height)?;
    info!(
        "Loaded benchmark {} ({}x{}, {} scenarios)",
        name,
        width,
        height,
        scenarios.len()
    );
    Ok(Benchmark {
        name: name.to_owned(),
        map,
        width,
        height,
        scenarios,
    })
}

/// Like [load_benchmark], but fails early with [BenchmarkError::UnknownBenchmark] if `name`
/// is not one of the [benchmark_names].
pub fn get_benchmark(root: &Path, name: &str) -> Result<Benchmark, BenchmarkError> {
    if benchmark_names(root)?.iter().any(|n| n == name) {
        load_benchmark(root, name)
    } else {
        Err(BenchmarkError::UnknownBenchmark(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const MAP: &str = "type octile\nheight 3\nwidth 4\nmap\n.@..\n.T.G\nS...\n";
    const SCEN: &str = "version 1\n\
        0\tt.map\t4\t3\t0\t0\t3\t2\t5.0\n\
        0\tt.map\t4\t3\t0\t0\t9\t9\t1.0\n";

    #[test]
    fn parses_map_rows() {
        let (map, width, height) = parse_map(MAP).unwrap();
        assert_eq!((width, height), (4, 3));
        assert_eq!(map, vec![0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn short_map_is_malformed() {
        let result = parse_map("type octile\nheight 3\nwidth 2\nmap\n..\n..\n");
        assert!(matches!(result, Err(BenchmarkError::MalformedMap(_))));
        let result = parse_map("type octile\nmap\n..\n");
        assert!(matches!(result, Err(BenchmarkError::MalformedMap(_))));
    }

    #[test]
    fn parses_scenarios_and_skips_out_of_bounds() {
        let scenarios = parse_scenarios(SCEN, 4, 3).unwrap();
        assert_eq!(
            scenarios,
            vec![Scenario {
                start: Point::new(0, 0),
                end: Point::new(3, 2),
                distance: 5.0
            }]
        );
    }

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "maze_benchmark_{}_{}",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("maps/dao")).unwrap();
        fs::create_dir_all(dir.join("scenarios/dao")).unwrap();
        dir
    }

    #[test]
    fn loads_benchmark_from_disk() {
        let root = scratch_dir("load");
        fs::write(root.join("maps/dao/tiny.map"), MAP).unwrap();
        fs::write(root.join("scenarios/dao/tiny.map.scen"), SCEN).unwrap();
        fs::write(root.join("maps/notes.txt"), "not a map").unwrap();

        assert_eq!(benchmark_names(&root).unwrap(), vec!["dao/tiny".to_owned()]);
        let benchmark = get_benchmark(&root, "dao/tiny").unwrap();
        assert_eq!((benchmark.width, benchmark.height), (4, 3));
        assert_eq!(benchmark.scenarios.len(), 1);
        assert!(matches!(
            get_benchmark(&root, "dao/missing"),
            Err(BenchmarkError::UnknownBenchmark(_))
        ));
        fs::remove_dir_all(&root).unwrap();
    }
}
