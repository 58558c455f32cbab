//! Equivalent grammars in both serializations.

/// A small but complete grammar in JSON form.
pub const MARKDOWN_LITE_JSON: &str = r##"{
  "name": "Markdown Lite",
  "scopeName": "text.html.markdown.lite",
  "fileTypes": ["md", "markdown"],
  "firstLineMatch": "^#!.*\\bmd\\b",
  "patterns": [
    { "include": "#heading" },
    { "include": "#fenced" }
  ],
  "repository": {
    "heading": {
      "match": "^(#{1,6})\\s+(.*)$",
      "captures": {
        "1": { "name": "punctuation.definition.heading.markdown" },
        "2": { "name": "entity.name.section.markdown" }
      }
    },
    "fenced": {
      "begin": "^```(\\w*)",
      "end": "^```",
      "beginCaptures": {},
      "contentName": "markup.raw.block <&> “quoted”",
      "patterns": []
    }
  },
  "injectionSelector": "L:text.html.markdown",
  "version": 3,
  "weight": 0.75,
  "deprecated": false,
  "experimental": true
}"##;

/// The same grammar as an XML property list.
pub const MARKDOWN_LITE_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>name</key>
	<string>Markdown Lite</string>
	<key>scopeName</key>
	<string>text.html.markdown.lite</string>
	<key>fileTypes</key>
	<array>
		<string>md</string>
		<string>markdown</string>
	</array>
	<key>firstLineMatch</key>
	<string>^#!.*\bmd\b</string>
	<key>patterns</key>
	<array>
		<dict>
			<key>include</key>
			<string>#heading</string>
		</dict>
		<dict>
			<key>include</key>
			<string>#fenced</string>
		</dict>
	</array>
	<key>repository</key>
	<dict>
		<key>heading</key>
		<dict>
			<key>match</key>
			<string>^(#{1,6})\s+(.*)$</string>
			<key>captures</key>
			<dict>
				<key>1</key>
				<dict>
					<key>name</key>
					<string>punctuation.definition.heading.markdown</string>
				</dict>
				<key>2</key>
				<dict>
					<key>name</key>
					<string>entity.name.section.markdown</string>
				</dict>
			</dict>
		</dict>
		<key>fenced</key>
		<dict>
			<key>begin</key>
			<string>^```(\w*)</string>
			<key>end</key>
			<string>^```</string>
			<key>beginCaptures</key>
			<dict/>
			<key>contentName</key>
			<string>markup.raw.block &lt;&amp;&gt; “quoted”</string>
			<key>patterns</key>
			<array/>
		</dict>
	</dict>
	<key>injectionSelector</key>
	<string>L:text.html.markdown</string>
	<key>version</key>
	<integer>3</integer>
	<key>weight</key>
	<real>0.75</real>
	<key>deprecated</key>
	<false/>
	<key>experimental</key>
	<true/>
</dict>
</plist>
"#;

/// Number of dictionaries and arrays in the grammar above.
pub const MARKDOWN_LITE_CONTAINERS: usize = 13;
