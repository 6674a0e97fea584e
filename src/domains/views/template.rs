//! Shared HTML templates for the view pages.
//!
//! Every view is a full-bleed iframe around a route of the remote frontend.
//! Selection views additionally carry the bridge script: it connects to the
//! app host, listens for `postMessage` events coming from the iframe, relays
//! the selected value to a server tool, and forwards the resulting text to
//! the host chat.
//!
//! The bridge accepts messages only from the embedded iframe's own window and
//! drops repeat selections arriving within the debounce window.

/// Milliseconds between accepted selections.
const DEBOUNCE_MS: u32 = 400;

/// Host-side app library loaded by the bridge script.
const EXT_APPS_URL: &str = "https://unpkg.com/@modelcontextprotocol/ext-apps@0.4.0/app-with-deps";

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width,initial-scale=1" />
    <style>
      html, body {
        height: 100%;
        margin: 0;
        overflow: hidden;
      }
      iframe {
        width: 100%;
        height: 100%;
        border: 0;
        display: block;
      }
    </style>
  </head>
  <body>
    <iframe id="app" src="{frontend_url}"></iframe>
{bridge_script}  </body>
</html>"#;

const BRIDGE_TEMPLATE: &str = r#"
    <script type="module">
      import { App } from "{ext_apps_url}";

      const app = new App({ name: "Catalog UI Wrapper", version: "1.0.0" });
      await app.connect();

      const iframe = document.getElementById("app");

      let lastSentAt = 0;

      window.addEventListener("message", async (ev) => {
        // only accept messages from our own iframe
        if (ev.source !== iframe.contentWindow) return;

        const data = ev.data || {};
        if (data.type !== "{message_type}") return;

        const value = data.value;

        // debounce rapid re-selection
        const now = Date.now();
        if (now - lastSentAt < {debounce_ms}) return;
        lastSentAt = now;

        // 1) call the server tool that builds the confirmation message
        const toolResult = await app.callServerTool({
          name: "{tool_name}",
          arguments: { value }
        });

        // 2) extract the text content from the result
        const text = toolResult?.content?.find(c => c.type === "text")?.text
          ?? `Selección: ${value}`;

        // 3) forward it to the host chat
        await app.sendMessage({
          role: "user",
          content: [{ type: "text", text }]
        });
      });
    </script>
"#;

/// Render a selection view: iframe plus the postMessage-to-tool bridge.
pub fn bridge_page(frontend_url: &str, message_type: &str, tool_name: &str) -> String {
    let script = BRIDGE_TEMPLATE
        .replace("{ext_apps_url}", EXT_APPS_URL)
        .replace("{message_type}", message_type)
        .replace("{tool_name}", tool_name)
        .replace("{debounce_ms}", &DEBOUNCE_MS.to_string());

    PAGE_TEMPLATE
        .replace("{frontend_url}", frontend_url)
        .replace("{bridge_script}", &script)
}

/// Render a plain embed view: iframe only, no bridge.
pub fn embed_page(frontend_url: &str) -> String {
    PAGE_TEMPLATE
        .replace("{frontend_url}", frontend_url)
        .replace("{bridge_script}", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_page_wires_iframe_and_tool() {
        let html = bridge_page(
            "https://front.example/range-earings",
            "range_earnings_selected",
            "build_range_earnings_message",
        );

        assert!(html.contains(r#"src="https://front.example/range-earings""#));
        assert!(html.contains(r#"data.type !== "range_earnings_selected""#));
        assert!(html.contains(r#"name: "build_range_earnings_message""#));
        assert!(html.contains("lastSentAt < 400"));
        assert!(html.contains(EXT_APPS_URL));
    }

    #[test]
    fn test_bridge_page_leaves_no_tokens() {
        let html = bridge_page("https://f.example/x", "t_selected", "build_t");
        assert!(!html.contains("{frontend_url}"));
        assert!(!html.contains("{message_type}"));
        assert!(!html.contains("{tool_name}"));
        assert!(!html.contains("{debounce_ms}"));
        assert!(!html.contains("{bridge_script}"));
        assert!(!html.contains("{ext_apps_url}"));
    }

    #[test]
    fn test_embed_page_has_no_script() {
        let html = embed_page("https://front.example/card-dashboard?count=3");
        assert!(html.contains(r#"src="https://front.example/card-dashboard?count=3""#));
        assert!(!html.contains("<script"));
    }
}
