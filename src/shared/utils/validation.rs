use crate::shared::errors::AppError;
use serde_json::Value;

const GEOMETRY_TYPES: [&str; 7] = [
    "Point",
    "MultiPoint",
    "LineString",
    "MultiLineString",
    "Polygon",
    "MultiPolygon",
    "GeometryCollection",
];

pub struct Validator;

impl Validator {
    pub fn validate_layer_title(title: &str) -> Result<(), AppError> {
        Self::validate_title("title", title, 255)
    }

    pub fn validate_feature_title(title: &str) -> Result<(), AppError> {
        Self::validate_title("title", title, 255)
    }

    pub fn validate_content_title(title: &str) -> Result<(), AppError> {
        Self::validate_title("title", title, 255)
    }

    fn validate_title(field: &str, title: &str, max_len: usize) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::validation(field, "Title cannot be empty"));
        }
        if title.len() > max_len {
            return Err(AppError::validation(
                field,
                format!("Title too long (max {} characters)", max_len),
            ));
        }
        Ok(())
    }

    /// Accepts a GeoJSON geometry object; coordinates are stored as given.
    pub fn validate_geometry(geometry: &Value) -> Result<(), AppError> {
        let object = geometry
            .as_object()
            .ok_or_else(|| AppError::validation("geometry", "Geometry must be an object"))?;

        let geometry_type = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::validation("geometry", "Geometry type is required"))?;

        if !GEOMETRY_TYPES.contains(&geometry_type) {
            return Err(AppError::validation(
                "geometry",
                format!("Unknown geometry type '{}'", geometry_type),
            ));
        }

        if geometry_type != "GeometryCollection" && !object.contains_key("coordinates") {
            return Err(AppError::validation(
                "geometry",
                "Geometry coordinates are required",
            ));
        }

        Ok(())
    }

    pub fn validate_pagination(page: u32, per_page: u32) -> Result<(), AppError> {
        if page == 0 {
            return Err(AppError::validation("page", "Page must be positive"));
        }
        if per_page == 0 {
            return Err(AppError::validation("perPage", "Page size must be positive"));
        }
        if per_page > 100 {
            return Err(AppError::validation("perPage", "Page size cannot exceed 100"));
        }
        Ok(())
    }
}
