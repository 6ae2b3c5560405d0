//! Stylesheet inlined into every generated newsletter.

/// Brand blue used by header, footer and link buttons.
pub const BRAND_COLOR: &str = "#407fb7";

/// Light blue behind each event card.
pub const CARD_COLOR: &str = "#c7ddf2";

pub const CONTAINER_MAX_WIDTH_PX: u32 = 800;

/// Viewport width under which link buttons stack vertically.
pub const MOBILE_BREAKPOINT_PX: u32 = 600;

/// Returns the complete CSS for the `<style>` element.
pub fn stylesheet() -> String {
    format!(
        r#"body {{
  font-family: Verdana, sans-serif;
  margin: 0;
  padding: 0;
  background-color: #f4f4f4;
}}
.container {{
  width: 100%;
  max-width: {CONTAINER_MAX_WIDTH_PX}px;
  margin: 0 auto;
  padding: 20px;
  background-color: white;
}}
.header, .footer {{
  text-align: center;
  padding: 20px;
  background-color: {BRAND_COLOR};
  color: white;
}}
.content {{
  padding: 20px;
}}
.hello {{
  line-height: 1.5;
}}
.event-wrapper {{
  display: flex;
  justify-content: center;
}}
.event-card {{
  border: 1px solid #ddd;
  border-radius: 8px;
  padding: 16px;
  margin: 20px 0;
  background-color: {CARD_COLOR};
  max-width: 600px;
  box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
  width: 100%;
}}
.event-title {{
  font-weight: bold;
  font-size: 1.25em;
  margin-bottom: 1em;
}}
.event-links {{
  margin-top: 15px;
}}
.event-links a {{
  display: inline-block;
  padding: 10px 15px;
  margin-right: 10px;
  margin-bottom: 10px;
  text-decoration: none;
  font-size: 1em;
  color: white;
  border-radius: 5px;
}}
.event-link, .event-register-link {{
  display: inline-block;
  padding: 10px 15px;
  margin-right: 10px;
  text-decoration: none;
  font-size: 1em;
  color: white;
  border-radius: 5px;
  background-color: {BRAND_COLOR};
}}
.event-link:hover, .event-register-link:hover {{
  opacity: 0.8;
}}
@media only screen and (max-width: {MOBILE_BREAKPOINT_PX}px) {{
  .event-links a {{
    display: block;
    width: 90%;
    margin-right: 0;
  }}
}}
"#
    )
}
