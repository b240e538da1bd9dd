use crate::mood::{MoodLevel, MOODS};

pub fn render_index(today: &str) -> String {
    INDEX_HTML
        .replace("{{TODAY}}", today)
        .replace("{{MOOD_BUTTONS}}", &mood_buttons(&MOODS))
        .replace("{{MOOD_OPTIONS}}", &mood_options(&MOODS))
}

fn mood_buttons(moods: &[MoodLevel]) -> String {
    moods
        .iter()
        .map(|mood| {
            format!(
                r#"<button type="button" class="mood-btn" role="radio" aria-checked="false" data-key="{key}"><span class="emoji">{emoji}</span><span class="label">{label}</span></button>"#,
                key = mood.key,
                emoji = mood.emoji,
                label = mood.label,
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn mood_options(moods: &[MoodLevel]) -> String {
    moods
        .iter()
        .map(|mood| {
            format!(
                r#"<option value="{}">{} {}</option>"#,
                mood.key, mood.emoji, mood.label
            )
        })
        .collect::<Vec<_>>()
        .join("\n          ")
}


const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en" data-theme="light">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f3f1ec;
      --bg-2: #cfe3dc;
      --ink: #2b2a28;
      --muted: #6f6a65;
      --accent: #3f8f7a;
      --accent-2: #2f4858;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.86);
      --panel: white;
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    [data-theme="dark"] {
      --bg-1: #16191d;
      --bg-2: #1f3a34;
      --ink: #ecebe8;
      --muted: #a19c96;
      --card: rgba(28, 31, 36, 0.9);
      --panel: #22262c;
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.4);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), var(--bg-1));
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 6px 0 0;
      color: var(--muted);
    }

    .card {
      background: var(--panel);
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 14px;
    }

    .row {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: end;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    input, select, textarea {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      background: transparent;
      color: var(--ink);
    }

    textarea {
      min-height: 70px;
      resize: vertical;
    }

    .mood-picker {
      display: grid;
      grid-template-columns: repeat(5, 1fr);
      gap: 10px;
    }

    .mood-btn {
      display: grid;
      justify-items: center;
      gap: 4px;
      padding: 12px 6px;
      border-radius: 16px;
      border: 2px solid transparent;
      background: rgba(47, 72, 88, 0.06);
      color: var(--ink);
      cursor: pointer;
    }

    .mood-btn .emoji {
      font-size: 1.8rem;
    }

    .mood-btn.selected {
      border-color: var(--accent);
      background: rgba(63, 143, 122, 0.12);
    }

    .btn {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    .btn.ghost {
      background: rgba(47, 72, 88, 0.08);
      color: var(--ink);
    }

    .btn.danger {
      background: var(--danger);
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent);
    }

    #trend {
      width: 100%;
      height: 180px;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: var(--panel);
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-slot {
      fill: var(--muted);
      opacity: 0.3;
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .history {
      display: grid;
      gap: 10px;
    }

    .history-item {
      display: grid;
      grid-template-columns: auto 1fr auto;
      gap: 14px;
      align-items: center;
      padding: 12px;
      border-radius: 14px;
      background: rgba(47, 72, 88, 0.05);
    }

    .history-item .badge {
      font-size: 1.6rem;
    }

    .history-item .note {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .history-item .actions {
      display: flex;
      gap: 8px;
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .empty {
      color: var(--muted);
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 18px;
      }
      .mood-picker {
        grid-template-columns: repeat(3, 1fr);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Mood Tracker</h1>
        <p class="subtitle">One entry per day. Saving the same date again updates it.</p>
      </div>
      <button class="btn ghost" id="theme-toggle" type="button">Toggle theme</button>
    </header>

    <form class="card" id="entry-form">
      <h2>Log your mood</h2>
      <div class="row">
        <label>Date <input type="date" id="entry-date" value="{{TODAY}}" /></label>
      </div>
      <div class="mood-picker" role="radiogroup" aria-label="Mood">
        {{MOOD_BUTTONS}}
      </div>
      <label>Note <textarea id="entry-note" placeholder="What happened today?"></textarea></label>
      <div class="row">
        <button class="btn" type="submit">Save</button>
        <button class="btn ghost" type="button" id="clear-form">Clear form</button>
      </div>
    </form>

    <section class="stats">
      <div class="card stat">
        <span class="label">7-day average</span>
        <span class="value" id="avg7">—</span>
      </div>
      <div class="card stat">
        <span class="label">Streak</span>
        <span class="value" id="streak">0 days</span>
      </div>
      <div class="card stat">
        <span class="label">Entries</span>
        <span class="value" id="total">0</span>
      </div>
    </section>

    <section class="card">
      <h2>Last 14 days</h2>
      <svg id="trend" viewBox="0 0 600 180" aria-label="Mood trend" role="img"></svg>
    </section>

    <section class="card">
      <h2>History</h2>
      <div class="row">
        <label>From <input type="date" id="from-date" /></label>
        <label>To <input type="date" id="to-date" /></label>
        <label>Mood
          <select id="mood-select">
          <option value="all">All moods</option>
          {{MOOD_OPTIONS}}
          </select>
        </label>
        <button class="btn" type="button" id="apply-filters">Apply</button>
        <button class="btn ghost" type="button" id="reset-filters">Reset</button>
      </div>
      <div class="history" id="history"></div>
      <p class="empty" id="empty-state">No entries match.</p>
    </section>

    <section class="card">
      <h2>Data</h2>
      <div class="row">
        <a class="btn ghost" href="/api/export" download>Export JSON</a>
        <label class="btn ghost">Import JSON <input type="file" id="import-file" accept="application/json,.json" hidden /></label>
        <button class="btn danger" type="button" id="clear-all">Clear all</button>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const THEME_KEY = 'mood-tracker-theme:v1';
    const $ = (id) => document.getElementById(id);
    const moodButtons = Array.from(document.querySelectorAll('.mood-btn'));
    let moods = [];
    let selectedMood = null;

    const setStatus = (message, type) => {
      $('status').textContent = message;
      $('status').dataset.type = type || '';
    };

    const setTheme = (theme) => {
      document.documentElement.dataset.theme = theme;
      localStorage.setItem(THEME_KEY, theme);
    };

    const selectMood = (key) => {
      selectedMood = key;
      moodButtons.forEach((button) => {
        const selected = button.dataset.key === key;
        button.classList.toggle('selected', selected);
        button.setAttribute('aria-checked', String(selected));
      });
    };

    const localToday = () => {
      const now = new Date();
      const pad = (value) => String(value).padStart(2, '0');
      return `${now.getFullYear()}-${pad(now.getMonth() + 1)}-${pad(now.getDate())}`;
    };

    const clearForm = (resetDate) => {
      if (resetDate) {
        $('entry-date').value = localToday();
      }
      $('entry-note').value = '';
      selectMood(null);
    };

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const moodFor = (key) => moods.find((mood) => mood.key === key);

    const formatDate = (iso) =>
      new Date(iso + 'T00:00:00').toLocaleDateString(undefined, { year: 'numeric', month: 'short', day: 'numeric' });

    const filterQuery = () => {
      const params = new URLSearchParams({
        from: $('from-date').value,
        to: $('to-date').value,
        mood: $('mood-select').value
      });
      return params.toString();
    };

    const renderHistory = (entries) => {
      const list = $('history');
      list.innerHTML = '';
      $('empty-state').style.display = entries.length ? 'none' : 'block';

      entries.forEach((entry) => {
        const mood = moodFor(entry.moodKey);
        const item = document.createElement('div');
        item.className = 'history-item';

        const badge = document.createElement('div');
        badge.className = 'badge';
        badge.textContent = mood ? mood.emoji : '?';

        const meta = document.createElement('div');
        const date = document.createElement('div');
        date.textContent = formatDate(entry.date);
        const note = document.createElement('div');
        note.className = 'note';
        note.textContent = entry.note || '—';
        meta.append(date, note);

        const actions = document.createElement('div');
        actions.className = 'actions';
        const edit = document.createElement('button');
        edit.className = 'btn ghost';
        edit.type = 'button';
        edit.textContent = 'Load to edit';
        edit.addEventListener('click', () => {
          $('entry-date').value = entry.date;
          selectMood(entry.moodKey);
          $('entry-note').value = entry.note || '';
          window.scrollTo({ top: 0, behavior: 'smooth' });
        });
        const remove = document.createElement('button');
        remove.className = 'btn danger';
        remove.type = 'button';
        remove.textContent = 'Delete';
        remove.addEventListener('click', () => {
          if (!confirm(`Delete entry for ${formatDate(entry.date)}?`)) {
            return;
          }
          request(`/api/entries/${encodeURIComponent(entry.id)}`, { method: 'DELETE' })
            .then(refresh)
            .catch((err) => setStatus(err.message, 'error'));
        });
        actions.append(edit, remove);

        item.append(badge, meta, actions);
        list.appendChild(item);
      });
    };

    const renderTrend = (points) => {
      const width = 600;
      const height = 180;
      const padX = 24;
      const padY = 24;
      const step = points.length > 1 ? (width - padX * 2) / (points.length - 1) : 0;
      const x = (index) => padX + index * step;
      const y = (score) => height - padY - ((score - 1) / 4) * (height - padY * 2);

      let path = '';
      let drawing = false;
      points.forEach((point, index) => {
        if (point.score === null) {
          drawing = false;
          return;
        }
        path += `${drawing ? 'L' : 'M'} ${x(index).toFixed(2)} ${y(point.score).toFixed(2)} `;
        drawing = true;
      });

      const slots = points
        .map((_, index) => `<circle class="chart-slot" cx="${x(index)}" cy="${height - padY + 8}" r="1.6" />`)
        .join('');
      const circles = points
        .map((point, index) =>
          point.score === null ? '' : `<circle class="chart-point" cx="${x(index)}" cy="${y(point.score)}" r="4" />`)
        .join('');
      const labels = points
        .map((point, index) =>
          index % 2 === 0 ? `<text class="chart-label" x="${x(index)}" y="${height - 2}" text-anchor="middle">${point.date.slice(5)}</text>` : '')
        .join('');

      $('trend').innerHTML = `${slots}<path class="chart-line" d="${path.trim()}" />${circles}${labels}`;
    };

    const renderStats = (stats) => {
      $('avg7').textContent = stats.average_7 === null ? '—' : stats.average_7.toFixed(2);
      $('streak').textContent = `${stats.streak} day${stats.streak === 1 ? '' : 's'}`;
      $('total').textContent = String(stats.total);
      renderTrend(stats.trend);
    };

    const refresh = async () => {
      const [entries, stats] = await Promise.all([
        request(`/api/entries?${filterQuery()}`),
        request('/api/stats')
      ]);
      renderHistory(entries);
      renderStats(stats);
    };

    const save = async (event) => {
      event.preventDefault();
      const date = $('entry-date').value;
      if (!date) {
        setStatus('Please select a date.', 'error');
        return;
      }
      if (!selectedMood) {
        setStatus('Please select a mood.', 'error');
        return;
      }
      await request('/api/entries', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ date, mood: selectedMood, note: $('entry-note').value })
      });
      clearForm(false);
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
      await refresh();
    };

    const importFile = async (event) => {
      const file = event.target.files && event.target.files[0];
      if (!file) {
        return;
      }
      try {
        const summary = await request('/api/import', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: await file.text()
        });
        setStatus(`Import complete: ${summary.accepted} entries merged.`, 'ok');
        await refresh();
      } finally {
        event.target.value = '';
      }
    };

    const clearAll = async () => {
      if ($('history').children.length === 0 && $('total').textContent === '0') {
        setStatus('Nothing to clear.', 'info');
        return;
      }
      if (!confirm('This will permanently delete all entries. Continue?')) {
        return;
      }
      await request('/api/entries?confirm=true', { method: 'DELETE' });
      await refresh();
    };

    setTheme(localStorage.getItem(THEME_KEY) || 'light');
    $('theme-toggle').addEventListener('click', () => {
      setTheme(document.documentElement.dataset.theme === 'light' ? 'dark' : 'light');
    });
    moodButtons.forEach((button) => {
      button.addEventListener('click', () => selectMood(button.dataset.key));
    });
    $('entry-form').addEventListener('submit', (event) => save(event).catch((err) => setStatus(err.message, 'error')));
    $('clear-form').addEventListener('click', () => clearForm(true));
    $('apply-filters').addEventListener('click', () => refresh().catch((err) => setStatus(err.message, 'error')));
    $('reset-filters').addEventListener('click', () => {
      $('from-date').value = '';
      $('to-date').value = '';
      $('mood-select').value = 'all';
      refresh().catch((err) => setStatus(err.message, 'error'));
    });
    $('import-file').addEventListener('change', (event) => importFile(event).catch((err) => setStatus(err.message, 'error')));
    $('clear-all').addEventListener('click', () => clearAll().catch((err) => setStatus(err.message, 'error')));

    request('/api/moods')
      .then((list) => {
        moods = list;
        return refresh();
      })
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
