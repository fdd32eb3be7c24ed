//! Export vers GeoJSON avec geozero (streaming, zero-copy)

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use geozero::geojson::GeoJsonWriter;
use geozero::GeozeroGeometry;

use mtk::OutputFeature;

/// Exporte des objets tagués en GeoJSON (streaming avec geozero)
///
/// `epsg` renseigne le membre `crs` (les coordonnées ne sont pas reprojetées).
pub fn export_to_geojson(features: &[OutputFeature], epsg: u32, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    write_collection(&mut writer, features, epsg)?;
    writer.flush()?;

    Ok(())
}

/// Écrit une FeatureCollection complète
fn write_collection<W: Write>(writer: &mut W, features: &[OutputFeature], epsg: u32) -> Result<()> {
    // Header FeatureCollection avec CRS
    write!(
        writer,
        r#"{{"type":"FeatureCollection","crs":{{"type":"name","properties":{{"name":"urn:ogc:def:crs:EPSG::{}"}}}},"features":["#,
        epsg
    )?;

    for (i, feature) in features.iter().enumerate() {
        if i > 0 {
            write!(writer, ",")?;
        }
        write_feature(writer, feature)?;
    }

    write!(writer, "]}}")?;
    Ok(())
}

/// Écrit un objet en GeoJSON, les tags OSM en propriétés
///
/// L'identifiant et les tags passent par serde_json (échappement compris),
/// la géométrie par geozero.
fn write_feature<W: Write>(writer: &mut W, feature: &OutputFeature) -> Result<()> {
    write!(writer, r#"{{"type":"Feature","id":"#)?;
    serde_json::to_writer(&mut *writer, &feature.id)?;

    write!(writer, r#","geometry":"#)?;
    {
        let mut geom_writer = GeoJsonWriter::new(&mut *writer);
        feature.geometry.process_geom(&mut geom_writer)?;
    }

    write!(writer, r#","properties":"#)?;
    serde_json::to_writer(&mut *writer, &feature.tags)?;
    write!(writer, "}}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Geometry, Point};
    use mtk::types::tags_from;

    fn chimney() -> OutputFeature {
        OutputFeature {
            id: "test_123".to_string(),
            geometry: Geometry::Point(Point::new(385000.0, 6672000.0)),
            tags: tags_from(&[("man_made", "chimney"), ("source", "MTK_2013")]),
        }
    }

    #[test]
    fn test_write_feature() {
        let mut buffer = Vec::new();
        write_feature(&mut buffer, &chimney()).unwrap();

        let json = String::from_utf8(buffer).unwrap();
        assert!(json.starts_with(r#"{"type":"Feature","id":"test_123","geometry":"#));
        assert!(json.ends_with(r#""properties":{"man_made":"chimney","source":"MTK_2013"}}"#));
    }

    #[test]
    fn test_write_collection_is_valid_json() {
        let mut untagged = chimney();
        untagged.id = "empty".to_string();
        untagged.tags.clear();

        let mut buffer = Vec::new();
        write_collection(&mut buffer, &[chimney(), untagged], 3067).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"].as_array().unwrap().len(), 2);
        assert_eq!(value["features"][0]["properties"]["source"], "MTK_2013");
        assert!(value["features"][1]["properties"]
            .as_object()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let mut feature = chimney();
        feature.id = "Tieviiva_\"7\"".to_string();
        feature
            .tags
            .insert("name".to_string(), "Kauppa \"Ässä\"\n\tOy\\".to_string());

        let mut buffer = Vec::new();
        write_feature(&mut buffer, &feature).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["id"], "Tieviiva_\"7\"");
        assert_eq!(value["properties"]["name"], "Kauppa \"Ässä\"\n\tOy\\");
        assert_eq!(value["geometry"]["type"], "Point");
    }

    #[test]
    fn test_export_to_geojson() {
        let temp_dir = std::env::temp_dir();
        let output_path = temp_dir.join("mtk2osm_test_export.geojson");

        export_to_geojson(&[chimney()], 3067, &output_path).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains(r#""type":"FeatureCollection""#));
        assert!(content.contains("EPSG::3067"));
        assert!(content.contains(r#""id":"test_123""#));

        std::fs::remove_file(output_path).ok();
    }
}
