#[cfg(feature = "async")]
mod tests_async_reader;

use std::path::{Path, PathBuf};

pub(super) const JSON_GRAMMAR: &str = r#"{
  "scopeName": "source.demo",
  "patterns": [{ "match": "\\d+", "name": "constant.numeric.demo" }]
}"#;

pub(super) const PLIST_GRAMMAR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
	<key>scopeName</key>
	<string>source.demo</string>
	<key>patterns</key>
	<array>
		<dict>
			<key>match</key>
			<string>\d+</string>
			<key>name</key>
			<string>constant.numeric.demo</string>
		</dict>
	</array>
</dict>
</plist>
"#;

pub(super) fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture");
    path
}
