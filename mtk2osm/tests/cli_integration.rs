//! Tests d'intégration: dossier de couches GeoJSON -> couches taguées

use std::path::{Path, PathBuf};

use mtk::{LayerFilter, Translator};
use mtk2osm::{Config, Pipeline, TranslationStatus};
use serde_json::Value;

const TIEVIIVA: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "id": "tie-1",
            "geometry": {"type": "LineString", "coordinates": [[385000.0, 6672000.0], [385050.0, 6672020.0], [385100.0, 6672100.0]]},
            "properties": {
                "kohdeluokka": 12121,
                "nimi_suomi": "Aleksanterinkatu",
                "nimi_ruotsi": "Alexandersgatan",
                "minOsoitenumeroVasen": 10,
                "minOsoitenumeroOikea": -1,
                "maxOsoitenumeroVasen": -1,
                "maxOsoitenumeroOikea": 20,
                "paallyste": 2
            }
        },
        {
            "type": "Feature",
            "id": "tie-2",
            "geometry": {"type": "LineString", "coordinates": [[385000.0, 6672000.0], [385000.0, 6672500.0]]},
            "properties": {"kohdeluokka": 99999}
        }
    ]
}"#;

const KORKEUSARVO: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [385000.0, 6672000.0]},
            "properties": {"kohdeluokka": 52190, "teksti": "75"}
        }
    ]
}"#;

/// Dossier temporaire propre à un test
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mtk2osm-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(dir.join("input")).unwrap();
    dir
}

fn write_layer(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join("input").join(format!("{}.geojson", name)), content).unwrap();
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn output_layers(dir: &Path) -> Vec<String> {
    let pattern = format!("{}/output/*.geojson", dir.display());
    let mut names: Vec<String> = glob::glob(&pattern)
        .unwrap()
        .filter_map(|p| p.ok())
        .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(String::from))
        .collect();
    names.sort();
    names
}

#[test]
fn test_translate_directory() {
    let dir = scratch_dir("directory");
    write_layer(&dir, "Tieviiva", TIEVIIVA);
    write_layer(&dir, "Korkeuskayrankorkeusarvo", KORKEUSARVO);

    let pipeline = Pipeline::new(Translator::new(), LayerFilter::new(), encoding_rs::UTF_8);
    let report = pipeline
        .run(&dir.join("input"), &dir.join("output"), Some(2))
        .unwrap();

    // la couche refusée ne produit pas de fichier
    assert_eq!(output_layers(&dir), vec!["Tieviiva"]);
    assert_eq!(report.status, TranslationStatus::Success);
    assert_eq!(report.layers_processed, 1);
    assert_eq!(report.skipped_layers, vec!["Korkeuskayrankorkeusarvo"]);
    assert_eq!(report.features_written, 2);
    assert_eq!(report.auxiliaries_written, 2);
    assert_eq!(report.unknown_codes.get(&99999), Some(&1));

    let collection = read_json(&dir.join("output/Tieviiva.geojson"));
    assert_eq!(
        collection["crs"]["properties"]["name"],
        "urn:ogc:def:crs:EPSG::3067"
    );
    let features = collection["features"].as_array().unwrap();
    assert_eq!(features.len(), 4);

    let road = &features[0]["properties"];
    assert_eq!(road["highway"], "road");
    assert_eq!(road["name"], "Aleksanterinkatu");
    assert_eq!(road["addr:interpolation"], "all");
    assert_eq!(road["source"], "MTK_2013");

    let first = &features[1];
    assert_eq!(first["geometry"]["type"], "Point");
    assert_eq!(first["properties"]["addr:housenumber"], "10");
    assert_eq!(first["geometry"]["coordinates"][0].as_f64(), Some(385000.0));
    let last = &features[2];
    assert_eq!(last["properties"]["addr:housenumber"], "20");
    assert_eq!(last["geometry"]["coordinates"][1].as_f64(), Some(6672100.0));

    // code inconnu: seule la provenance
    let unknown = features[3]["properties"].as_object().unwrap();
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown["source"], "MTK_2013");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_source_override_and_report_file() {
    let dir = scratch_dir("source");
    write_layer(&dir, "Tieviiva", TIEVIIVA);

    let config = Config {
        source: "MTK_2024".to_string(),
        ..Config::default()
    };
    let report = Pipeline::from_config(&config)
        .unwrap()
        .run(&dir.join("input/Tieviiva.geojson"), &dir.join("output"), None)
        .unwrap();

    let collection = read_json(&dir.join("output/Tieviiva.geojson"));
    assert_eq!(collection["features"][0]["properties"]["source"], "MTK_2024");

    let report_path = dir.join("report.json");
    report.save_to_file(&report_path).unwrap();
    let saved = read_json(&report_path);
    assert_eq!(saved["source"], "MTK_2024");
    assert_eq!(saved["status"], "Success");
    assert_eq!(saved["unknown_codes"]["99999"], 1);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_malformed_field_aborts_unless_keep_going() {
    let dir = scratch_dir("malformed");
    let broken = TIEVIIVA.replace(r#""paallyste": 2"#, r#""paallyste": "asphalt""#);
    write_layer(&dir, "Tieviiva", &broken);

    let pipeline = Pipeline::new(Translator::new(), LayerFilter::new(), encoding_rs::UTF_8);
    assert!(pipeline
        .run(&dir.join("input"), &dir.join("output"), None)
        .is_err());

    let report = pipeline
        .keep_going(true)
        .run(&dir.join("input"), &dir.join("output"), None)
        .unwrap();
    assert_eq!(report.status, TranslationStatus::PartialSuccess);
    assert_eq!(report.features_skipped, 1);
    assert_eq!(report.features_written, 1);

    let collection = read_json(&dir.join("output/Tieviiva.geojson"));
    assert_eq!(collection["features"].as_array().unwrap().len(), 1);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_extra_denied_layers() {
    let dir = scratch_dir("denied");
    write_layer(&dir, "Tieviiva", TIEVIIVA);

    let config = Config {
        extra_denied_layers: vec!["Tieviiva".to_string()],
        ..Config::default()
    };
    let report = Pipeline::from_config(&config)
        .unwrap()
        .run(&dir.join("input"), &dir.join("output"), None)
        .unwrap();

    assert!(output_layers(&dir).is_empty());
    assert_eq!(report.layers_skipped, 1);
    assert_eq!(report.features_read, 0);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_empty_input_directory() {
    let dir = scratch_dir("empty");
    let pipeline = Pipeline::new(Translator::new(), LayerFilter::new(), encoding_rs::UTF_8);
    assert!(pipeline
        .run(&dir.join("input"), &dir.join("output"), None)
        .is_err());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_map_sheets_keep_their_subdirectory() {
    let dir = scratch_dir("sheets");
    let chimney = |x: f64| {
        format!(
            r#"{{"type":"FeatureCollection","features":[{{"type":"Feature","geometry":{{"type":"Point","coordinates":[{},6672000.0]}},"properties":{{"kohdeluokka":45300}}}}]}}"#,
            x
        )
    };
    for (sheet, x) in [("L4131", 385000.0), ("L4132", 391000.0)] {
        let sheet_dir = dir.join("input").join(sheet);
        std::fs::create_dir_all(&sheet_dir).unwrap();
        std::fs::write(sheet_dir.join("Savupiippu.geojson"), chimney(x)).unwrap();
    }

    let pipeline = Pipeline::new(Translator::new(), LayerFilter::new(), encoding_rs::UTF_8);
    let report = pipeline
        .run(&dir.join("input"), &dir.join("output"), None)
        .unwrap();
    assert_eq!(report.layers_processed, 2);
    assert_eq!(report.features_written, 2);

    let pattern = format!("{}/output/**/*.geojson", dir.display());
    let written: Vec<PathBuf> = glob::glob(&pattern)
        .unwrap()
        .filter_map(|p| p.ok())
        .collect();
    assert_eq!(written.len(), 2);

    let mut on_disk = 0;
    for (sheet, x) in [("L4131", 385000.0), ("L4132", 391000.0)] {
        let collection = read_json(&dir.join("output").join(sheet).join("Savupiippu.geojson"));
        let features = collection["features"].as_array().unwrap();
        assert_eq!(features[0]["geometry"]["coordinates"][0].as_f64(), Some(x));
        assert_eq!(features[0]["properties"]["man_made"], "chimney");
        on_disk += features.len();
    }
    assert_eq!(on_disk, report.features_written);

    let _ = std::fs::remove_dir_all(&dir);
}
