//! Catalog documents and predefined workspaces
//!
//! The sample catalog has two categories. Automation holds PLC Systems (two
//! products) and the HMI Panel product; Drives holds Servo Systems with a
//! servo kit whose only child is a motor.

#![allow(dead_code)]

use super::workspace::*;

pub const SAMPLE_CATALOG: &str = r#"{
  "products": [
    {
      "id": "automation",
      "name": "Automation",
      "type": "category",
      "image": "/images/automation.png",
      "children": [
        {
          "id": "plc",
          "name": "PLC Systems",
          "type": "subcategory",
          "children": [
            {
              "id": "s7-1200",
              "name": "S7-1200",
              "type": "product",
              "description": "Compact controller",
              "details": {
                "features": ["Integrated PROFINET", "Web server"],
                "specs": {"Supply": "24 V DC", "Memory": "150 KB"},
                "downloads": [{"label": "Datasheet", "file": "/docs/s7-1200.pdf"}]
              }
            },
            {
              "id": "s7-1500",
              "name": "S7-1500",
              "type": "product",
              "details": {"features": ["Safety integrated"]}
            }
          ]
        },
        {
          "id": "hmi",
          "name": "HMI Panel",
          "type": "product",
          "details": {"features": ["Touch display"]}
        }
      ]
    },
    {
      "id": "drives",
      "name": "Drives",
      "type": "category",
      "children": [
        {
          "id": "servo",
          "name": "Servo Systems",
          "type": "subcategory",
          "children": [
            {
              "id": "servo-kit",
              "name": "Servo Kit",
              "type": "product",
              "details": {"features": ["Pre-tuned"]},
              "children": [
                {"id": "servo-motor", "name": "Servo Motor", "type": "product"}
              ]
            }
          ]
        }
      ]
    }
  ]
}"#;

/// Scenario: the two-category sample catalog
pub fn create_sample_workspace() -> anyhow::Result<TestWorkspace> {
    setup_workspace_with_catalog(SAMPLE_CATALOG)
}

/// Scenario: a catalog file with no products
pub fn create_empty_workspace() -> anyhow::Result<TestWorkspace> {
    setup_workspace_with_catalog(r#"{"products": []}"#)
}

/// Scenario: a catalog file that is not valid JSON
pub fn create_broken_workspace() -> anyhow::Result<TestWorkspace> {
    setup_workspace_with_catalog("{ \"products\": [")
}
