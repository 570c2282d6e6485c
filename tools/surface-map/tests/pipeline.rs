//! End-to-end pipeline test: station file through rendered figure.

use gridding::{
    interpolate, observations, remove_nan_observations, remove_repeat_coordinates,
    InterpolationMethod,
};
use obs_common::BoundingBox;
use projection::{project_observations, AlbersEqualArea};
use renderer::{render_map, save_png, BoundaryNorm, Colormap};
use station_parser::{dedup_by_station, extract, read_station_file, Variable};
use std::io::Write;

/// Build a station record line with the schema columns at their fixed
/// positions (20-column format) and filler elsewhere.
fn record_line(stid: &str, lat: f64, lon: f64, temp: &str) -> String {
    let mut fields = vec!["0".to_string(); 20];
    fields[1] = stid.to_string();
    fields[2] = lat.to_string();
    fields[3] = lon.to_string();
    fields[4] = "1013.0".to_string();
    fields[5] = temp.to_string();
    fields[6] = "0.4".to_string();
    fields[7] = "8.5".to_string();
    fields[17] = "CLR".to_string();
    fields[18] = "200".to_string();
    fields[19] = "5.0".to_string();
    fields.join(",")
}

fn write_station_file(lines: &[String]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "rep_time,stid,lat,lon,slp,tmpc,clds,dwpc").unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

#[test]
fn full_pipeline_renders_figure() {
    let file = write_station_file(&[
        record_line("TOP", 39.07, -95.62, "21.5"),
        record_line("DEN", 39.85, -104.66, "12.0"),
        // Duplicate station: first occurrence must win
        record_line("TOP", 39.07, -95.62, "99.0"),
        record_line("ICT", 37.65, -97.43, "19.0"),
        record_line("OMA", 41.30, -95.90, "15.5"),
        // Missing temperature: filtered after projection
        record_line("MCI", 39.30, -94.72, ""),
        record_line("OKC", 35.39, -97.60, "23.0"),
    ]);

    let records = dedup_by_station(read_station_file(file.path()).unwrap());
    assert_eq!(records.len(), 6, "7 records with one duplicated id -> 6 stations");

    let (lons, lats, values) = extract(&records, Variable::AirTemperature);
    let proj = AlbersEqualArea::conus();
    let (xs, ys) = project_observations(&proj, &lons, &lats).unwrap();

    let obs = observations(&xs, &ys, &values).unwrap();
    let obs = remove_nan_observations(&obs);
    assert_eq!(obs.len(), 5, "the missing-temperature station is dropped");
    let obs = remove_repeat_coordinates(&obs);
    assert_eq!(obs.len(), 5, "no repeated coordinates remain");

    let field = interpolate(&obs, InterpolationMethod::Linear, 75_000.0).unwrap();
    assert!(field.valid_count() > 0, "grid should have estimates inside the hull");
    // Interpolated estimates stay within the observed value range
    let (lo, hi) = field.value_range().unwrap();
    assert!(lo >= 12.0 - 1e-6 && hi <= 23.0 + 1e-6);

    let extent = BoundingBox::new(-120.0, 20.0, -70.0, 50.0);
    let cmap = Colormap::magma();
    let norm = BoundaryNorm::unit_range(-20, 20).unwrap();
    let figure = render_map(&field, &proj, &extent, 750, 500, &cmap, &norm);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("surface_map.png");
    save_png(&figure, &out).unwrap();

    let reloaded = image::open(&out).unwrap().to_rgba8();
    assert_eq!(reloaded.width(), 750);
    assert_eq!(reloaded.height(), 500);
}

#[test]
fn duplicate_coordinates_are_removed_once_projected() {
    // Two different station ids at the same position
    let file = write_station_file(&[
        record_line("AAA", 40.0, -100.0, "10.0"),
        record_line("BBB", 40.0, -100.0, "11.0"),
        record_line("CCC", 41.0, -101.0, "12.0"),
    ]);

    let records = dedup_by_station(read_station_file(file.path()).unwrap());
    assert_eq!(records.len(), 3, "distinct ids all survive deduplication");

    let (lons, lats, values) = extract(&records, Variable::AirTemperature);
    let proj = AlbersEqualArea::conus();
    let (xs, ys) = project_observations(&proj, &lons, &lats).unwrap();

    let obs = remove_repeat_coordinates(&observations(&xs, &ys, &values).unwrap());
    assert_eq!(obs.len(), 2, "identical coordinates collapse to the first");
    assert_eq!(obs[0].value, 10.0);
}
