/// API description endpoint
///
/// Serves a hand-maintained OpenAPI 3.0 document for the item and user
/// routes at `GET /openapi.json`. Any OpenAPI viewer can render it.

use axum::Json;
use serde_json::{json, Value};

/// OpenAPI handler
pub async fn openapi_spec() -> Json<Value> {
    Json(document())
}

/// Builds the OpenAPI document
pub fn document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "ToDo API",
            "version": "v1",
            "description": "A web API for managing ToDo items and users",
            "termsOfService": "https://example.com/terms",
            "contact": {
                "name": "Example Contact",
                "url": "https://example.com/contact"
            },
            "license": {
                "name": "Example License",
                "url": "https://example.com/license"
            }
        },
        "paths": {
            "/items": collection("Item", "items"),
            "/items/{id}": instance("Item", "item"),
            "/users": collection("User", "users"),
            "/users/{id}": instance("User", "user")
        },
        "components": {
            "schemas": {
                "Item": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer", "format": "int32", "readOnly": true },
                        "name": { "type": "string", "maxLength": 100, "nullable": true },
                        "isComplete": { "type": "boolean" }
                    }
                },
                "User": {
                    "type": "object",
                    "required": ["username", "passwordHash"],
                    "properties": {
                        "id": { "type": "integer", "format": "int32", "readOnly": true },
                        "username": { "type": "string", "maxLength": 50 },
                        "passwordHash": {
                            "type": "string",
                            "maxLength": 255,
                            "description": "Plaintext password in requests, stored hash in responses"
                        }
                    }
                }
            }
        }
    })
}

fn schema_ref(schema: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{}", schema) })
}

fn json_body(schema: Value) -> Value {
    json!({ "content": { "application/json": { "schema": schema } } })
}

fn collection(schema: &str, plural: &str) -> Value {
    let mut created = json_body(schema_ref(schema));
    created["description"] = json!(format!("Created; Location points at the new {}", schema.to_lowercase()));
    created["headers"] = json!({ "Location": { "schema": { "type": "string" } } });

    let mut listed = json_body(json!({ "type": "array", "items": schema_ref(schema) }));
    listed["description"] = json!(format!("All {}", plural));

    json!({
        "get": {
            "summary": format!("List all {}", plural),
            "responses": { "200": listed }
        },
        "post": {
            "summary": format!("Create a {}", schema.to_lowercase()),
            "requestBody": json_body(schema_ref(schema)),
            "responses": { "201": created }
        }
    })
}

fn instance(schema: &str, singular: &str) -> Value {
    let mut updated = json_body(schema_ref(schema));
    updated["description"] = json!(format!("Updated {}", singular));

    json!({
        "parameters": [{
            "name": "id",
            "in": "path",
            "required": true,
            "schema": { "type": "integer", "format": "int32" }
        }],
        "put": {
            "summary": format!("Update a {}", singular),
            "requestBody": json_body(schema_ref(schema)),
            "responses": {
                "200": updated,
                "404": { "description": format!("No {} with this id", singular) }
            }
        },
        "delete": {
            "summary": format!("Delete a {}", singular),
            "responses": {
                "204": { "description": "Deleted" },
                "404": { "description": format!("No {} with this id", singular) }
            }
        }
    })
}
