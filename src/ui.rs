use crate::keys::DateKey;

pub fn render_index(today: &DateKey) -> String {
    INDEX_HTML.replace("{{TODAY}}", today.as_str())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Journal</title>
  <style>
    :root {
      --paper: #fbfaf6;
      --rule: #d9dee8;
      --ink: #1f2933;
      --muted: #6b7280;
      --pen: #3b5bdb;
      --marker: #e8590c;
    }

    body {
      margin: 0;
      background: var(--paper);
      color: var(--ink);
      font-family: "Iowan Old Style", "Palatino Linotype", Georgia, serif;
      line-height: 1.5;
    }

    .app {
      max-width: 720px;
      margin: 0 auto;
      padding: 40px 20px 64px;
      display: flex;
      flex-direction: column;
      gap: 24px;
    }

    header {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      gap: 16px;
      border-bottom: 2px solid var(--ink);
      padding-bottom: 12px;
    }

    h1 {
      margin: 0;
      font-size: 2.2rem;
      font-weight: 700;
    }

    h2 {
      margin: 0 0 8px;
      font-size: 1rem;
      font-variant: small-caps;
      color: var(--muted);
    }

    section {
      border-left: 3px solid var(--rule);
      padding-left: 16px;
    }

    textarea {
      width: 100%;
      min-height: 180px;
      box-sizing: border-box;
      font: inherit;
      border: 1px solid var(--rule);
      background: repeating-linear-gradient(white, white 27px, var(--rule) 28px);
      line-height: 28px;
      padding: 0 8px;
    }

    input[type="text"], input[type="date"] {
      font: inherit;
      border: none;
      border-bottom: 1px solid var(--muted);
      background: transparent;
      padding: 4px 2px;
    }

    button {
      font: inherit;
      border: 1px solid var(--pen);
      background: none;
      color: var(--pen);
      padding: 2px 12px;
      cursor: pointer;
    }

    button:hover {
      background: var(--pen);
      color: white;
    }

    ul {
      list-style: none;
      padding: 0;
      margin: 12px 0 0;
    }

    li {
      padding: 4px 0;
    }

    input[type="range"] {
      vertical-align: middle;
      accent-color: var(--marker);
    }

    .rating-value {
      display: inline-block;
      min-width: 2ch;
      margin-left: 8px;
      color: var(--marker);
      font-weight: 700;
    }

    .status {
      min-height: 1.5em;
      font-style: italic;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: #c92a2a;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Daily Journal</h1>
      <input type="date" id="journalDate" value="{{TODAY}}" />
    </header>

    <section>
      <h2>Journal</h2>
      <textarea id="journalEntry" placeholder="How did today go?"></textarea>
    </section>

    <section>
      <h2>Checklist</h2>
      <input type="text" id="newItemInput" placeholder="New checklist item" />
      <button id="addItemButton" type="button">Add</button>
      <ul id="checklist"></ul>
    </section>

    <section>
      <h2>Ratings</h2>
      <input type="text" id="newRatingCategory" placeholder="New rating category" />
      <button id="addRatingCategoryButton" type="button">Add</button>
      <ul id="ratingList"></ul>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const dateInput = document.getElementById('journalDate');
    const journalEntry = document.getElementById('journalEntry');
    const checklist = document.getElementById('checklist');
    const ratingList = document.getElementById('ratingList');
    const newItemInput = document.getElementById('newItemInput');
    const newRatingCategory = document.getElementById('newRatingCategory');
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const request = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: { 'content-type': 'application/json' },
        body: body === undefined ? undefined : JSON.stringify(body)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    // One request in flight at a time, in event order, so the server applies
    // slider drags and toggles in the order they happened.
    let queue = Promise.resolve();
    const send = (method, url, body) => {
      const task = queue.then(() => request(method, url, body));
      queue = task.catch(() => {});
      return task;
    };

    // Handlers read the selector's live value so edits go to the date shown now.
    const selectedDate = () => dateInput.value;
    const dayUrl = (suffix) => `/api/days/${encodeURIComponent(selectedDate())}${suffix}`;

    const addChecklistRow = (row) => {
      const li = document.createElement('li');
      const checkbox = document.createElement('input');
      checkbox.type = 'checkbox';
      checkbox.checked = row.checked;
      checkbox.addEventListener('change', () => {
        if (!selectedDate()) return;
        send('PUT', dayUrl('/checked'), { name: row.name, checked: checkbox.checked })
          .catch((err) => setStatus(err.message, 'error'));
      });
      li.appendChild(checkbox);
      li.appendChild(document.createTextNode(` ${row.name}`));
      checklist.appendChild(li);
    };

    const addRatingRow = (row) => {
      const li = document.createElement('li');
      const label = document.createElement('label');
      label.textContent = `${row.name}: `;
      const slider = document.createElement('input');
      slider.type = 'range';
      slider.min = '0';
      slider.max = '10';
      slider.step = '1';
      slider.value = String(row.value);
      const valueDisplay = document.createElement('span');
      valueDisplay.className = 'rating-value';
      valueDisplay.textContent = String(row.value);
      slider.addEventListener('input', () => {
        valueDisplay.textContent = slider.value;
        if (!selectedDate()) return;
        send('PUT', dayUrl('/ratings'), { name: row.name, value: Number(slider.value) })
          .catch((err) => setStatus(err.message, 'error'));
      });
      li.appendChild(label);
      li.appendChild(slider);
      li.appendChild(valueDisplay);
      ratingList.appendChild(li);
    };

    const loadDay = async () => {
      if (!selectedDate()) return;
      const day = await send('GET', dayUrl(''));
      // A later date change already superseded this response.
      if (day.date !== selectedDate()) return;
      journalEntry.value = day.entry;
      checklist.innerHTML = '';
      day.checklist.forEach(addChecklistRow);
      ratingList.innerHTML = '';
      day.ratings.forEach(addRatingRow);
      setStatus('', '');
    };

    const submitName = async (input, url, render) => {
      const name = input.value.trim();
      if (name === '') return;
      const row = await send('POST', url, { name });
      if (row) render(row);
      input.value = '';
    };

    dateInput.addEventListener('change', () => {
      loadDay().catch((err) => setStatus(err.message, 'error'));
    });

    journalEntry.addEventListener('change', () => {
      if (!selectedDate()) return;
      send('PUT', dayUrl('/entry'), { text: journalEntry.value })
        .then(() => setStatus('Saved', 'ok'))
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('addItemButton').addEventListener('click', () => {
      submitName(newItemInput, '/api/checklist', addChecklistRow)
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('addRatingCategoryButton').addEventListener('click', () => {
      submitName(newRatingCategory, '/api/rating-categories', addRatingRow)
        .catch((err) => setStatus(err.message, 'error'));
    });

    loadDay().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
