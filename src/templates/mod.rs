use maud::{html, Markup, PreEscaped, DOCTYPE};

const PLATFORMS: [&str; 3] = ["Facebook", "Instagram", "Own Website"];

const FORM_SCRIPT: &str = r#"
const form = document.getElementById('propertyForm');
const locationInput = document.getElementById('location');
const suggestionsBox = document.getElementById('locationSuggestions');
let debounceTimer;

locationInput.addEventListener('input', () => {
  clearTimeout(debounceTimer);
  document.getElementById('latitude').value = '';
  document.getElementById('longitude').value = '';
  const query = locationInput.value.trim();
  if (query.length < 3) { suggestionsBox.classList.add('hidden'); return; }
  debounceTimer = setTimeout(async () => {
    const response = await fetch('/location-autocomplete?query=' + encodeURIComponent(query));
    const suggestions = response.ok ? await response.json() : [];
    suggestionsBox.innerHTML = '';
    suggestions.forEach((s) => {
      const item = document.createElement('div');
      item.className = 'suggestion';
      item.textContent = s.formatted;
      item.addEventListener('click', () => {
        locationInput.value = s.formatted;
        document.getElementById('latitude').value = s.lat;
        document.getElementById('longitude').value = s.lon;
        suggestionsBox.classList.add('hidden');
      });
      suggestionsBox.appendChild(item);
    });
    suggestionsBox.classList.toggle('hidden', suggestions.length === 0);
  }, 300);
});

form.addEventListener('submit', async (event) => {
  event.preventDefault();
  const data = Object.fromEntries(new FormData(form).entries());
  const status = document.getElementById('status');
  status.textContent = 'Generating...';
  const response = await fetch('/generate-prompt', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json', 'Accept': 'application/json' },
    body: JSON.stringify(data),
  });
  const body = await response.json();
  if (!response.ok) {
    const messages = body.messages ? Object.values(body.messages).flat().join(' ') : (body.message || body.error);
    status.textContent = messages;
    return;
  }
  status.textContent = '';
  document.getElementById('result').classList.remove('hidden');
  document.getElementById('generatedDescription').textContent = body.description;
  document.getElementById('nearbyPlaces').textContent = body.nearby_places.join(', ') || 'None found';
  document.getElementById('usedPrompt').textContent = body.prompt;
});
"#;

const PAGE_STYLE: &str = r#"
body { font-family: sans-serif; background: #f3f4f6; margin: 0; }
.container { max-width: 1100px; margin: 0 auto; padding: 2rem 1rem; display: flex; gap: 2rem; flex-wrap: wrap; }
.panel { flex: 1 1 420px; background: #fff; border-radius: 8px; padding: 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
label { display: block; font-weight: 600; margin: 1rem 0 .4rem; }
input, select, textarea { width: 100%; padding: .5rem; box-sizing: border-box; }
.suggestion { padding: .4rem .6rem; cursor: pointer; border-bottom: 1px solid #e5e7eb; }
.hidden { display: none; }
.description { white-space: pre-wrap; max-height: 70vh; overflow-y: auto; }
"#;

/// Property form consuming the autocomplete and generation endpoints
pub fn prompt_generator_page() -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Property Description Generator" }
                style { (PreEscaped(PAGE_STYLE)) }
            }
            body {
                h1 style="text-align:center" { "Property Description Generator" }
                div class="container" {
                    div class="panel" {
                        form id="propertyForm" {
                            label for="location" { "Location" }
                            input type="text" id="location" name="location"
                                placeholder="Start typing a U.S. location..." autocomplete="off";
                            input type="hidden" id="latitude" name="latitude";
                            input type="hidden" id="longitude" name="longitude";
                            div id="locationSuggestions" class="hidden" {}

                            label for="rooms" { "Number of Rooms" }
                            (count_select("rooms"))

                            label for="washrooms" { "Number of Washrooms" }
                            (count_select("washrooms"))

                            label for="description" { "Property Features & Amenities" }
                            textarea id="description" name="description" rows="4" maxlength="500"
                                placeholder="Pool, near downtown, modern design, spacious kitchen, etc." {}

                            label for="platform" { "Platform" }
                            select id="platform" name="platform" {
                                @for platform in PLATFORMS {
                                    option value=(platform) { (platform) }
                                }
                            }

                            p { button type="submit" { "Generate Description" } }
                            p id="status" {}
                        }
                    }
                    div id="result" class="panel hidden" {
                        h2 { "Generated Description" }
                        div id="generatedDescription" class="description" {}
                        h3 { "Nearby Places" }
                        p id="nearbyPlaces" {}
                        h3 { "Prompt" }
                        pre id="usedPrompt" style="white-space:pre-wrap" {}
                    }
                }
                script { (PreEscaped(FORM_SCRIPT)) }
            }
        }
    }
}

fn count_select(name: &str) -> Markup {
    html! {
        select id=(name) name=(name) {
            @for count in 1..=10 {
                option value=(count) { (count) }
            }
        }
    }
}
