//! Multipart form readers for the crop and configuration endpoints
//!
//! Field names are matched case-insensitively. Rectangles arrive as indexed fields
//! (`cropCoordinates[0].x`, `cropCoordinates[0].y`, ...) and are returned ordered by index.

use axum::extract::multipart::Field;
use axum::extract::Multipart;
use cropper_core::models::{ConfigurationForm, CropRectangle, CropRequest, UploadedFile};
use cropper_core::AppError;
use std::collections::BTreeMap;

use crate::error::multipart_error;

const IMAGE_FIELD: &str = "image";
const SCALE_DOWN_FIELD: &str = "scaledown";
const LOGO_POSITION_FIELD: &str = "logoposition";
const LOGO_IMAGE_FIELD: &str = "logoimage";
const COORDINATES_PREFIX: &str = "cropcoordinates[";

/// One of the four integer components of an indexed rectangle field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateComponent {
    X,
    Y,
    Width,
    Height,
}

impl CoordinateComponent {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "x" => Some(CoordinateComponent::X),
            "y" => Some(CoordinateComponent::Y),
            "width" => Some(CoordinateComponent::Width),
            "height" => Some(CoordinateComponent::Height),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            CoordinateComponent::X => "x",
            CoordinateComponent::Y => "y",
            CoordinateComponent::Width => "width",
            CoordinateComponent::Height => "height",
        }
    }
}

/// Parse `cropCoordinates[<index>].<component>` into its index and component.
pub fn parse_coordinate_field(name: &str) -> Option<(usize, CoordinateComponent)> {
    let lowered = name.trim().to_lowercase();
    let rest = lowered.strip_prefix(COORDINATES_PREFIX)?;
    let (index, component) = rest.split_once("].")?;
    let index = index.trim().parse::<usize>().ok()?;
    Some((index, CoordinateComponent::parse(component.trim())?))
}

#[derive(Debug, Default, Clone, Copy)]
struct PartialRectangle {
    x: Option<i32>,
    y: Option<i32>,
    width: Option<i32>,
    height: Option<i32>,
}

impl PartialRectangle {
    fn slot(&mut self, component: CoordinateComponent) -> &mut Option<i32> {
        match component {
            CoordinateComponent::X => &mut self.x,
            CoordinateComponent::Y => &mut self.y,
            CoordinateComponent::Width => &mut self.width,
            CoordinateComponent::Height => &mut self.height,
        }
    }
}

/// Accumulates indexed coordinate fields in any order
#[derive(Debug, Default)]
pub struct RectangleCollector {
    rectangles: BTreeMap<usize, PartialRectangle>,
}

impl RectangleCollector {
    pub fn push(
        &mut self,
        index: usize,
        component: CoordinateComponent,
        value: &str,
    ) -> Result<(), AppError> {
        let parsed = value.trim().parse::<i32>().map_err(|_| {
            AppError::InvalidInput(format!(
                "Crop coordinate {} has an invalid {} value",
                index,
                component.as_str()
            ))
        })?;
        *self.rectangles.entry(index).or_default().slot(component) = Some(parsed);
        Ok(())
    }

    pub fn finish(self) -> Result<Vec<CropRectangle>, AppError> {
        self.rectangles
            .into_iter()
            .map(|(index, partial)| {
                let missing = |component: CoordinateComponent| {
                    AppError::InvalidInput(format!(
                        "Crop coordinate {} is missing {}",
                        index,
                        component.as_str()
                    ))
                };
                Ok(CropRectangle::new(
                    partial.x.ok_or_else(|| missing(CoordinateComponent::X))?,
                    partial.y.ok_or_else(|| missing(CoordinateComponent::Y))?,
                    partial
                        .width
                        .ok_or_else(|| missing(CoordinateComponent::Width))?,
                    partial
                        .height
                        .ok_or_else(|| missing(CoordinateComponent::Height))?,
                ))
            })
            .collect()
    }
}

/// Parse the `scaleDown` form value. An empty value is treated as absent.
pub fn parse_scale_down(value: &str) -> Result<Option<f32>, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<f32>()
        .map(Some)
        .map_err(|_| AppError::InvalidInput("scaleDown must be a number".to_string()))
}

async fn read_file(field: Field<'_>) -> Result<UploadedFile, AppError> {
    let file_name = field.file_name().map(|s| s.to_string());
    let content_type = field.content_type().map(|s| s.to_string());
    let data = field.bytes().await.map_err(multipart_error)?;

    Ok(UploadedFile {
        data: data.to_vec(),
        content_type,
        file_name,
    })
}

async fn read_text(field: Field<'_>) -> Result<String, AppError> {
    field.text().await.map_err(multipart_error)
}

/// Read a crop request: the source `image` plus indexed `cropCoordinates` fields.
/// Unknown fields are ignored.
pub async fn read_crop_form(mut multipart: Multipart) -> Result<CropRequest, AppError> {
    let mut image = None;
    let mut collector = RectangleCollector::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(|s| s.to_lowercase()).unwrap_or_default();

        if name == IMAGE_FIELD {
            image = Some(read_file(field).await?);
        } else if let Some((index, component)) = parse_coordinate_field(&name) {
            let value = read_text(field).await?;
            collector.push(index, component, &value)?;
        }
    }

    Ok(CropRequest {
        image,
        rectangles: collector.finish()?,
    })
}

/// Read a configuration create/update form. A missing `scaleDown` stays at 0 and is
/// rejected by validation.
pub async fn read_configuration_form(
    mut multipart: Multipart,
) -> Result<ConfigurationForm, AppError> {
    let mut form = ConfigurationForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(|s| s.to_lowercase()).unwrap_or_default();

        match name.as_str() {
            SCALE_DOWN_FIELD => {
                if let Some(scale_down) = parse_scale_down(&read_text(field).await?)? {
                    form.scale_down = scale_down;
                }
            }
            LOGO_POSITION_FIELD => form.logo_position = read_text(field).await?,
            LOGO_IMAGE_FIELD => form.logo_image = Some(read_file(field).await?),
            _ => {}
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate_field() {
        assert_eq!(
            parse_coordinate_field("cropCoordinates[0].x"),
            Some((0, CoordinateComponent::X))
        );
        assert_eq!(
            parse_coordinate_field("CROPCOORDINATES[12].Height"),
            Some((12, CoordinateComponent::Height))
        );
        assert_eq!(parse_coordinate_field("cropCoordinates[a].x"), None);
        assert_eq!(parse_coordinate_field("cropCoordinates[0].depth"), None);
        assert_eq!(parse_coordinate_field("image"), None);
    }

    fn push_rect(collector: &mut RectangleCollector, index: usize, values: [&str; 4]) {
        let components = [
            CoordinateComponent::X,
            CoordinateComponent::Y,
            CoordinateComponent::Width,
            CoordinateComponent::Height,
        ];
        for (component, value) in components.into_iter().zip(values) {
            collector.push(index, component, value).expect("push");
        }
    }

    #[test]
    fn test_collector_orders_by_index() {
        let mut collector = RectangleCollector::default();
        push_rect(&mut collector, 5, ["50", "51", "52", "53"]);
        push_rect(&mut collector, 0, ["0", "1", "2", "3"]);
        push_rect(&mut collector, 2, ["-20", "21", "22", "23"]);

        let rects = collector.finish().expect("rectangles");
        assert_eq!(
            rects,
            vec![
                CropRectangle::new(0, 1, 2, 3),
                CropRectangle::new(-20, 21, 22, 23),
                CropRectangle::new(50, 51, 52, 53),
            ]
        );
    }

    #[test]
    fn test_collector_rejects_missing_component() {
        let mut collector = RectangleCollector::default();
        collector
            .push(0, CoordinateComponent::X, "1")
            .expect("push");
        collector
            .push(0, CoordinateComponent::Y, "1")
            .expect("push");
        collector
            .push(0, CoordinateComponent::Width, "1")
            .expect("push");

        match collector.finish() {
            Err(AppError::InvalidInput(msg)) => assert_eq!(msg, "Crop coordinate 0 is missing height"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_collector_rejects_non_integer() {
        let mut collector = RectangleCollector::default();
        let err = collector
            .push(3, CoordinateComponent::Width, "10.5")
            .unwrap_err();
        assert!(err.to_string().contains("Crop coordinate 3 has an invalid width value"));
    }

    #[test]
    fn test_parse_scale_down() {
        assert_eq!(parse_scale_down(" 0.2 ").expect("number"), Some(0.2));
        assert_eq!(parse_scale_down("").expect("empty"), None);
        assert!(parse_scale_down("abc").is_err());
    }
}
