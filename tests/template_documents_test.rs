//! Expanded CloudFormation templates must still be valid JSON and YAML

use cfn_import::{FileSystemResolver, ImportOptions, Mode, import_document};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

const LAUNCHER: &str = r#"import os
import json

def lambda_handler(event, context):
    for record in event['Records']:
        message = json.loads(record['Sns']['Message'])
        if message["Event"] != "autoscaling:EC2_INSTANCE_LAUNCH":
            print("Ignoring event: " + message["Event"])
            continue
"#;

const JSON_TEMPLATE: &str = r#"{
  "Resources": {
    "LaunchLambda": {
      "Type": "AWS::Lambda::Function",
      "Properties": {
        "Code": {
          "ZipFile": { "Fn::Join": [ "\n", [
            "%%{lambda-launcher.py}%%"
          ] ] }
        }
      }
    }
  }
}
"#;

const YAML_TEMPLATE: &str = r##"# Embedded launcher
LaunchLambda:
  Type: AWS::Lambda::Function
  Properties:
    Code:
      ZipFile:
        Fn::Join:
        - "\n"
        - - "# Import external file"
          - "%%{lambda-launcher.py}%%"
"##;

fn expand_template(template: &str, mode: Mode) -> String {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("lambda-launcher.py"), LAUNCHER).unwrap();
    let resolver = FileSystemResolver::new(temp_dir.path());

    let mut output = Vec::new();
    import_document(
        Cursor::new(template),
        &mut output,
        ImportOptions::new(mode),
        &resolver,
    )
    .unwrap();
    String::from_utf8(output).unwrap()
}

fn launcher_lines() -> Vec<String> {
    LAUNCHER.lines().map(str::to_string).collect()
}

#[test]
fn test_json_template_stays_valid() {
    let expanded = expand_template(JSON_TEMPLATE, Mode::Json);
    let doc: serde_json::Value = serde_json::from_str(&expanded).unwrap();

    let join = &doc["Resources"]["LaunchLambda"]["Properties"]["Code"]["ZipFile"]["Fn::Join"];
    assert_eq!(join[0], "\n");
    let body: Vec<String> = join[1]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    assert_eq!(body, launcher_lines());
}

#[test]
fn test_yaml_template_stays_valid() {
    let expanded = expand_template(YAML_TEMPLATE, Mode::Yaml);
    assert!(expanded.starts_with("# Embedded launcher\n"));

    let doc: serde_yaml::Value = serde_yaml::from_str(&expanded).unwrap();
    let join = &doc["LaunchLambda"]["Properties"]["Code"]["ZipFile"]["Fn::Join"];
    let body: Vec<String> = join[1]
        .as_sequence()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();

    let mut expected = vec!["# Import external file".to_string()];
    expected.extend(launcher_lines());
    assert_eq!(body, expected);
}
