use super::*;

/// Decodes an explicit `null` as the field's default value.
pub(crate) fn deserialize_nullable<'de, D, T>(
  deserializer: D,
) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de> + Default,
{
  Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn push_block(blocks: &mut Vec<String>, raw: &mut String, preformatted: bool) {
  let decoded = html_escape::decode_html_entities(raw.as_str());

  let block = if preformatted {
    decoded.trim_matches('\n').trim_end().to_string()
  } else {
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
  };

  if !block.is_empty() {
    blocks.push(block);
  }

  raw.clear();
}

/// Renders an HTML fragment from the API as plain text.
///
/// `<p>` starts a new paragraph, separated by a blank line. Whitespace
/// inside `<pre>` is kept as is; everywhere else it collapses to single
/// spaces. Other tags are dropped.
pub(crate) fn sanitize_html(text: &str) -> String {
  let mut blocks = Vec::new();
  let mut raw = String::with_capacity(text.len());
  let mut preformatted = false;
  let mut chars = text.chars();

  while let Some(ch) = chars.next() {
    if ch != '<' {
      raw.push(ch);
      continue;
    }

    let tag = chars.by_ref().take_while(|&ch| ch != '>').collect::<String>();

    match tag_name(&tag).as_str() {
      "p" => push_block(&mut blocks, &mut raw, preformatted),
      "pre" => {
        push_block(&mut blocks, &mut raw, preformatted);
        preformatted = true;
      }
      "/pre" => {
        push_block(&mut blocks, &mut raw, true);
        preformatted = false;
      }
      _ => {}
    }
  }

  push_block(&mut blocks, &mut raw, preformatted);

  blocks.join("\n\n")
}

fn tag_name(tag: &str) -> String {
  tag
    .split_whitespace()
    .next()
    .unwrap_or_default()
    .trim_end_matches('/')
    .to_ascii_lowercase()
}
