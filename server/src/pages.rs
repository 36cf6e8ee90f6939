//! Server-rendered HTML pages.
//!
//! Every page shares `layout`. User-controlled text goes through
//! `html_escape` before it is interpolated.

use html_escape::{encode_double_quoted_attribute, encode_text};
use items_core::{Item, NewItemInput};

/// Browser-side cap on the name field. Kept above the validator's limit so an
/// overlong name still reaches the server and gets the inline error.
const NAME_INPUT_MAXLENGTH: usize = 50;

const EMPTY_LIST: &str = "No items found. Create your first item to get started!";

const STYLES: &str = r#"
:root {
  --primary-color: #f9a825;
  --primary-light: #ffcc66;
  --secondary-color: #87ceeb;
  --bg-color: #0a0f2a;
  --bg-gradient-end: #2a1a40;
  --text-color: #f0e6d2;
  --subtle-bg: #101535;
  --border-color: #333858;
}
*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
body {
  font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Arial, sans-serif;
  line-height: 1.7;
  color: var(--text-color);
  background-image: linear-gradient(90deg, var(--bg-color) 0%, var(--bg-gradient-end) 100%);
  min-height: 100vh;
}
.container { max-width: 1140px; width: 90%; margin: 0 auto; padding: 0 1rem; }
.app-header { border-bottom: 1px solid var(--border-color); padding: 1.5rem 0; margin-bottom: 2rem; text-align: center; }
.app-header .logo { font-size: 1.8rem; font-weight: 700; color: var(--primary-light); text-decoration: none; }
.app-header .logo span { color: var(--secondary-color); }
.content-section { padding: 3rem 0; }
.content-section h1, .content-section h2 { text-align: center; margin-bottom: 1.5rem; color: #fff; }
.content-section p { text-align: center; margin: 0 auto 2rem auto; max-width: 700px; }
.btn { display: inline-block; padding: 0.8rem 1.8rem; border-radius: 50px; text-decoration: none; font-weight: 600; cursor: pointer; border: none; margin: 0.25rem; }
.btn-primary { background-color: var(--primary-color); color: var(--bg-color); }
.btn-secondary { background-color: transparent; color: var(--primary-light); border: 1px solid var(--primary-light); }
.cta-buttons { display: flex; justify-content: center; gap: 1rem; margin-top: 2rem; }
.table { width: 100%; border-collapse: collapse; margin: 2rem 0; background-color: var(--subtle-bg); border: 1px solid var(--border-color); }
.table th, .table td { padding: 1rem; text-align: left; border-bottom: 1px solid var(--border-color); }
.table th { color: var(--primary-light); }
.table .btn { padding: 0.3em 0.6em; font-size: 0.8em; }
.form-group { margin-bottom: 1.5rem; }
.form-group label { display: block; margin-bottom: 0.5rem; color: var(--primary-light); }
.form-group input[type="text"] { width: 100%; padding: 0.75rem; border: 1px solid var(--border-color); border-radius: 4px; background-color: var(--subtle-bg); color: var(--text-color); }
.form-actions { margin-top: 2rem; display: flex; gap: 1rem; }
.error-message { color: #ff6b6b; font-weight: 500; margin-bottom: 1rem; }
"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLES}</style>
</head>
<body>
<header class="app-header"><a href="/" class="logo">Items<span>App</span></a></header>
<main class="container"><section class="content-section"><div class="container">
{body}
</div></section></main>
</body>
</html>
"#,
        title = encode_text(title),
    )
}

pub fn home() -> String {
    layout(
        "Items App",
        r#"<h1>Welcome to <span>Items</span></h1>
<p>Manage item records through a JSON API or these server-rendered pages.</p>
<h2>Explore</h2>
<div class="cta-buttons">
<a href="/items" class="btn btn-secondary">View All Items</a>
<a href="/create" class="btn btn-secondary">Create New Item</a>
</div>"#,
    )
}

fn item_row(item: &Item) -> String {
    format!(
        r#"<tr><td>{id}</td><td>{name}</td><td>{created}</td><td>{status}</td><td><a href="/api/v1/items/{id}" class="btn btn-secondary">View JSON</a></td></tr>"#,
        id = item.id,
        name = encode_text(&item.name),
        created = item.created_at.format("%b %d, %Y %H:%M"),
        status = item.status_label(),
    )
}

pub fn items_list(items: &[Item]) -> String {
    let content = if items.is_empty() {
        format!("<p>{EMPTY_LIST}</p>")
    } else {
        let rows: String = items.iter().map(item_row).collect();
        format!(
            r#"<table class="table">
<thead><tr><th>ID</th><th>Name</th><th>Created At</th><th>Status</th><th>Actions</th></tr></thead>
<tbody>{rows}</tbody>
</table>"#
        )
    };
    layout(
        "Items List",
        &format!(
            r#"<h1>Items Management</h1>
{content}
<div class="cta-buttons">
<a href="/" class="btn btn-secondary">Back to Home</a>
<a href="/create" class="btn btn-primary">Create New Item</a>
</div>"#
        ),
    )
}

/// The create form, refilled from `input`, with an optional error banner.
pub fn create_form(input: &NewItemInput, error: Option<&str>) -> String {
    let banner = error
        .map(|msg| format!(r#"<div class="error-message">{}</div>"#, encode_text(msg)))
        .unwrap_or_default();
    let value = if input.name.is_empty() {
        String::new()
    } else {
        format!(r#" value="{}""#, encode_double_quoted_attribute(&input.name))
    };
    let checked = if input.is_active { " checked" } else { "" };
    layout(
        "Create Item",
        &format!(
            r#"<h1>Create New Item</h1>
{banner}<form method="POST" action="/api/v1/items" enctype="application/x-www-form-urlencoded">
<div class="form-group">
<label for="name">Name:</label>
<input type="text" name="name" id="name" required maxlength="{NAME_INPUT_MAXLENGTH}" placeholder="Enter item name"{value}>
</div>
<div class="form-group">
<label><input type="checkbox" name="isActive" id="isActive"{checked}> Item is active</label>
</div>
<div class="form-actions">
<button type="submit" class="btn btn-primary">Create Item</button>
<a href="/items" class="btn btn-secondary">Cancel</a>
</div>
</form>
<a href="/" class="btn btn-secondary">Back to Home</a>"#
        ),
    )
}
