use crate::models::{StatsResponse, TOTAL_DAYS};

pub fn render_index(stats: &StatsResponse) -> String {
    INDEX_HTML
        .replace("{{COMPLETED}}", &stats.completed_count.to_string())
        .replace("{{REMAINING}}", &stats.remaining_count.to_string())
        .replace("{{STREAK}}", &stats.streak.to_string())
        .replace("{{PERCENT}}", &format!("{:.1}", stats.percentage))
        .replace(
            "{{PROGRESS_TEXT}}",
            &format!("{}/{} Days", stats.completed_count, TOTAL_DAYS),
        )
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>150-Day Study Roadmap</title>
  <style>
    :root {
      --bg-1: #eef2ff;
      --bg-2: #dbeafe;
      --ink: #1e293b;
      --accent: #3b82f6;
      --accent-2: #10b981;
      --danger: #ef4444;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 24px 60px rgba(30, 58, 138, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e0e7ff 60%, #eff6ff 100%);
      color: var(--ink);
      font-family: "Segoe UI", "Trebuchet MS", sans-serif;
      display: grid;
      justify-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 26px;
    }

    header h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
    }

    .subtitle {
      margin: 6px 0 0;
      color: #64748b;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(30, 58, 138, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #94a3b8;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent);
    }

    .progress-track {
      height: 14px;
      border-radius: 999px;
      background: rgba(30, 58, 138, 0.1);
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      border-radius: 999px;
      background: linear-gradient(90deg, var(--accent), var(--accent-2));
      transition: width 300ms ease;
    }

    .progress-caption {
      display: flex;
      justify-content: space-between;
      font-size: 0.9rem;
      color: #64748b;
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      padding: 6px;
      background: rgba(30, 58, 138, 0.08);
      border-radius: 999px;
    }

    .month-btn {
      flex: 1;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 10px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #64748b;
      cursor: pointer;
    }

    .month-btn.active {
      background: white;
      color: var(--accent);
      box-shadow: 0 8px 16px rgba(30, 58, 138, 0.12);
    }

    .month-section {
      display: none;
    }

    .month-section.active {
      display: grid;
      gap: 14px;
    }

    .month-focus {
      margin: 0;
      color: #64748b;
      font-size: 0.95rem;
    }

    .day-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
      gap: 12px;
    }

    .day-card {
      background: white;
      border: 1px solid rgba(30, 58, 138, 0.1);
      border-radius: 14px;
      padding: 14px;
      display: grid;
      gap: 10px;
      transition: transform 200ms ease, border-color 200ms ease;
    }

    .day-card.completed {
      border-color: var(--accent-2);
      background: #ecfdf5;
    }

    .day-number {
      font-weight: 600;
    }

    .complete-btn {
      border: none;
      border-radius: 999px;
      padding: 8px 12px;
      font-size: 0.85rem;
      font-weight: 600;
      cursor: pointer;
      background: rgba(59, 130, 246, 0.12);
      color: var(--accent);
    }

    .day-card.completed .complete-btn {
      background: var(--accent-2);
      color: white;
    }

    .actions {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 14px;
    }

    .actions button {
      border: none;
      border-radius: 999px;
      padding: 14px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      color: white;
    }

    #exportJsonBtn {
      background: var(--accent);
    }

    #exportPdfBtn {
      background: var(--accent-2);
    }

    #resetBtn {
      background: var(--danger);
    }

    .hint {
      margin: 0;
      color: #64748b;
      font-size: 0.85rem;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Class 12th Study Roadmap</h1>
      <p class="subtitle">150 days to your board exams. Mark each day complete as you finish it.</p>
    </header>

    <section>
      <div class="progress-caption">
        <span id="progressText">{{PROGRESS_TEXT}}</span>
        <span id="progressPercent">{{PERCENT}}%</span>
      </div>
      <div class="progress-track">
        <div id="overallProgress" class="progress-fill" style="width: {{PERCENT}}%"></div>
      </div>
    </section>

    <section class="panel">
      <div class="stat">
        <span class="label">Completed</span>
        <span id="completedDays" class="value">{{COMPLETED}}</span>
      </div>
      <div class="stat">
        <span class="label">Remaining</span>
        <span id="remainingDays" class="value">{{REMAINING}}</span>
      </div>
      <div class="stat">
        <span class="label">Best Streak</span>
        <span id="currentStreak" class="value">{{STREAK}}</span>
      </div>
    </section>

    <div class="tabs" id="monthTabs" role="tablist"></div>
    <div id="monthSections"></div>

    <section class="actions">
      <button id="exportJsonBtn" type="button">Export JSON</button>
      <button id="exportPdfBtn" type="button">Export PDF Report</button>
      <button id="resetBtn" type="button">Reset Progress</button>
    </section>

    <p class="hint">Shortcuts: Alt+R reset, Alt+E export JSON, Alt+P export PDF, 1-5 switch months. Progress is saved automatically.</p>
  </main>

  <script>
    const TOTAL_DAYS = 150;
    const MONTHS = [
      { month: 1, firstDay: 1, lastDay: 30, focus: 'Physics + Chemistry + Biology Basics' },
      { month: 2, firstDay: 31, lastDay: 60, focus: 'Physics + Chemistry Main Chapters' },
      { month: 3, firstDay: 61, lastDay: 90, focus: 'Biology + English' },
      { month: 4, firstDay: 91, lastDay: 120, focus: 'Hindi + Full Revision PCB Start' },
      { month: 5, firstDay: 121, lastDay: 150, focus: 'Final Revision + Tests + PYQ' }
    ];
    const CONFETTI_COLORS = ['#3b82f6', '#10b981', '#f59e0b', '#ef4444', '#8b5cf6'];

    let completedDays = new Set();

    const progressBar = document.getElementById('overallProgress');
    const progressText = document.getElementById('progressText');
    const progressPercent = document.getElementById('progressPercent');
    const completedEl = document.getElementById('completedDays');
    const remainingEl = document.getElementById('remainingDays');
    const streakEl = document.getElementById('currentStreak');

    function buildMonthSections() {
      const tabs = document.getElementById('monthTabs');
      const sections = document.getElementById('monthSections');

      MONTHS.forEach((month, index) => {
        const btn = document.createElement('button');
        btn.className = 'month-btn' + (index === 0 ? ' active' : '');
        btn.type = 'button';
        btn.dataset.month = month.month;
        btn.textContent = 'Month ' + month.month;
        btn.addEventListener('click', () => setActiveMonth(month.month));
        tabs.appendChild(btn);

        const section = document.createElement('section');
        section.className = 'month-section' + (index === 0 ? ' active' : '');
        section.dataset.month = month.month;

        const focus = document.createElement('p');
        focus.className = 'month-focus';
        focus.textContent = 'Days ' + month.firstDay + '-' + month.lastDay + ': ' + month.focus;
        section.appendChild(focus);

        const grid = document.createElement('div');
        grid.className = 'day-grid';
        for (let day = month.firstDay; day <= month.lastDay; day++) {
          const card = document.createElement('div');
          card.className = 'day-card';
          card.dataset.day = day;

          const label = document.createElement('span');
          label.className = 'day-number';
          label.textContent = 'Day ' + day;
          card.appendChild(label);

          const btnComplete = document.createElement('button');
          btnComplete.className = 'complete-btn';
          btnComplete.type = 'button';
          btnComplete.textContent = 'Mark Complete';
          btnComplete.addEventListener('click', () => {
            toggleDay(day, card).catch((err) => alert(err.message));
          });
          card.appendChild(btnComplete);

          grid.appendChild(card);
        }
        section.appendChild(grid);
        sections.appendChild(section);
      });
    }

    function setActiveMonth(monthNum) {
      document.querySelectorAll('.month-btn').forEach((btn) => {
        btn.classList.toggle('active', Number(btn.dataset.month) === monthNum);
      });
      document.querySelectorAll('.month-section').forEach((section) => {
        section.classList.toggle('active', Number(section.dataset.month) === monthNum);
      });
      window.scrollTo({ top: 0, behavior: 'smooth' });
    }

    function renderCards() {
      document.querySelectorAll('.day-card').forEach((card) => {
        const day = Number(card.dataset.day);
        const done = completedDays.has(day);
        card.classList.toggle('completed', done);
        card.querySelector('.complete-btn').textContent = done ? 'Completed ✓' : 'Mark Complete';
      });
    }

    function updateStats(stats) {
      progressBar.style.width = stats.percentage + '%';
      progressPercent.textContent = stats.percentage.toFixed(1) + '%';
      progressText.textContent = stats.completed_count + '/' + TOTAL_DAYS + ' Days';
      completedEl.textContent = stats.completed_count;
      remainingEl.textContent = stats.remaining_count;
      streakEl.textContent = stats.streak;

      if (stats.completed_count === TOTAL_DAYS) {
        celebrateCompletion();
      }
    }

    async function loadProgress() {
      const res = await fetch('/api/progress');
      if (!res.ok) {
        throw new Error('Unable to load progress');
      }
      const data = await res.json();
      completedDays = new Set(data.completed_days);
      renderCards();
    }

    async function loadStats() {
      const res = await fetch('/api/stats');
      if (!res.ok) {
        throw new Error('Unable to load stats');
      }
      updateStats(await res.json());
    }

    async function toggleDay(day, card) {
      const res = await fetch('/api/toggle', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ day })
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }

      const status = await res.json();
      if (status.completed) {
        completedDays.add(day);
        animateCardCompletion(card);
      } else {
        completedDays.delete(day);
      }
      renderCards();
      loadStats().catch((err) => alert(err.message));
    }

    function animateCardCompletion(card) {
      card.style.transform = 'scale(1.05)';
      setTimeout(() => {
        card.style.transform = '';
      }, 300);
      createConfetti(card);
    }

    function createConfetti(element) {
      const rect = element.getBoundingClientRect();
      for (let i = 0; i < 20; i++) {
        const confetti = document.createElement('div');
        confetti.style.cssText =
          'position:fixed;width:8px;height:8px;border-radius:50%;pointer-events:none;z-index:9999;transition:all 1s ease-out;';
        confetti.style.left = rect.left + rect.width / 2 + 'px';
        confetti.style.top = rect.top + rect.height / 2 + 'px';
        confetti.style.backgroundColor = CONFETTI_COLORS[Math.floor(Math.random() * CONFETTI_COLORS.length)];
        document.body.appendChild(confetti);

        const angle = (Math.PI * 2 * i) / 20;
        const velocity = 100 + Math.random() * 100;
        setTimeout(() => {
          confetti.style.transform =
            'translate(' + Math.cos(angle) * velocity + 'px, ' + Math.sin(angle) * velocity + 'px)';
          confetti.style.opacity = '0';
        }, 10);
        setTimeout(() => confetti.remove(), 1000);
      }
    }

    function celebrateCompletion() {
      const modal = document.createElement('div');
      modal.style.cssText =
        'position:fixed;inset:0;background:rgba(0,0,0,0.9);display:flex;align-items:center;justify-content:center;z-index:10000;';
      modal.innerHTML =
        '<div style="text-align:center;padding:40px;background:linear-gradient(135deg,#7c3aed,#a855f7);border-radius:20px;max-width:500px;color:white;">' +
        '<h1 style="font-size:2.4rem;margin-bottom:20px;">Congratulations!</h1>' +
        '<p style="font-size:1.3rem;margin-bottom:30px;">You have completed all 150 days. You are ready for your exams!</p>' +
        '<button style="padding:15px 40px;font-size:1.1rem;background:#10b981;border:none;border-radius:10px;color:white;cursor:pointer;font-weight:600;">Close</button>' +
        '</div>';
      modal.querySelector('button').addEventListener('click', () => modal.remove());
      document.body.appendChild(modal);

      for (let i = 0; i < 100; i++) {
        setTimeout(() => {
          const confetti = document.createElement('div');
          confetti.style.cssText =
            'position:fixed;top:-20px;width:10px;height:10px;border-radius:50%;pointer-events:none;z-index:10001;transition:all 3s ease-in;';
          confetti.style.left = Math.random() * 100 + '%';
          confetti.style.backgroundColor = CONFETTI_COLORS[Math.floor(Math.random() * CONFETTI_COLORS.length)];
          document.body.appendChild(confetti);
          setTimeout(() => {
            confetti.style.top = '120%';
            confetti.style.transform = 'rotate(' + Math.random() * 720 + 'deg)';
          }, 10);
          setTimeout(() => confetti.remove(), 3000);
        }, i * 30);
      }
    }

    async function resetProgress() {
      if (!confirm('Are you sure you want to reset all progress? This cannot be undone!')) {
        return;
      }
      const res = await fetch('/api/reset', { method: 'POST' });
      if (!res.ok) {
        throw new Error('Reset failed');
      }
      completedDays.clear();
      renderCards();
      updateStats(await res.json());
      alert('Progress has been reset!');
    }

    function downloadBlob(blob, filename) {
      const url = URL.createObjectURL(blob);
      const link = document.createElement('a');
      link.href = url;
      link.download = filename;
      link.click();
      URL.revokeObjectURL(url);
    }

    function isoDate() {
      return new Date().toISOString().split('T')[0];
    }

    async function exportProgressJSON() {
      const res = await fetch('/api/export');
      if (!res.ok) {
        throw new Error('Export failed');
      }
      downloadBlob(await res.blob(), 'roadmap-progress-' + isoDate() + '.json');
      alert('JSON Progress exported successfully!');
    }

    async function exportProgressPDF() {
      const loadingMsg = document.createElement('div');
      loadingMsg.style.cssText =
        'position:fixed;top:50%;left:50%;transform:translate(-50%,-50%);background:rgba(0,0,0,0.9);color:white;padding:30px 50px;border-radius:15px;z-index:99999;font-size:18px;text-align:center;';
      loadingMsg.innerHTML = 'Generating PDF Report...<br><small>Please wait</small>';
      document.body.appendChild(loadingMsg);

      try {
        const res = await fetch('/api/export/pdf');
        if (!res.ok) {
          throw new Error((await res.text()) || 'PDF generation failed');
        }
        const filename = 'Class12-Roadmap-Report-' + isoDate() + '.pdf';
        downloadBlob(await res.blob(), filename);
        loadingMsg.remove();
        alert('PDF Report generated successfully!\n\nFile: ' + filename);
      } catch (err) {
        loadingMsg.remove();
        alert('Error generating PDF. Please try again.\n\n' + err.message);
      }
    }

    function setupKeyboardShortcuts() {
      document.addEventListener('keydown', (e) => {
        if (e.altKey && e.key === 'r') {
          e.preventDefault();
          resetProgress().catch((err) => alert(err.message));
        }
        if (e.altKey && e.key === 'e') {
          e.preventDefault();
          exportProgressJSON().catch((err) => alert(err.message));
        }
        if (e.altKey && e.key === 'p') {
          e.preventDefault();
          exportProgressPDF();
        }
        if (e.key >= '1' && e.key <= '5') {
          setActiveMonth(Number(e.key));
        }
      });
    }

    function init() {
      buildMonthSections();
      setupKeyboardShortcuts();

      document.getElementById('resetBtn').addEventListener('click', () => {
        resetProgress().catch((err) => alert(err.message));
      });
      document.getElementById('exportJsonBtn').addEventListener('click', () => {
        exportProgressJSON().catch((err) => alert(err.message));
      });
      document.getElementById('exportPdfBtn').addEventListener('click', exportProgressPDF);

      loadProgress()
        .then(loadStats)
        .then(() => {
          if (completedDays.size === 0) {
            setTimeout(() => {
              alert(
                'Welcome to your 150-Day Study Roadmap!\n\nClick "Mark Complete" on each day as you finish it. Your progress is saved automatically.\n\nKeyboard Shortcuts:\n- Alt + R: Reset Progress\n- Alt + E: Export JSON\n- Alt + P: Export PDF Report\n- 1-5: Switch between months\n\nGood luck!'
              );
            }, 1000);
          }
        })
        .catch((err) => alert(err.message));
    }

    init();
  </script>
</body>
</html>
"##;
