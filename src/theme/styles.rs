//! Global CSS styles for Agency Access.
//!
//! Dark slate glass card with one accent per agent.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SLATE (Backgrounds) */
  --slate-950: #020617;
  --slate-400: #94a3b8;
  --slate-300: #cbd5e1;
  --slate-100: #f1f5f9;

  /* GLASS */
  --glass: rgba(255, 255, 255, 0.05);
  --glass-hover: rgba(255, 255, 255, 0.10);
  --glass-border: rgba(255, 255, 255, 0.10);
  --glass-deep: rgba(2, 6, 23, 0.40);

  /* AGENTS */
  --fuchsia: #f0abfc;
  --fuchsia-border: rgba(232, 121, 249, 0.25);
  --fuchsia-glow: rgba(232, 121, 249, 0.30);
  --cyan: #a5f3fc;
  --cyan-border: rgba(103, 232, 249, 0.25);
  --cyan-glow: rgba(103, 232, 249, 0.30);

  /* SEMANTIC */
  --emerald: #a7f3d0;
  --emerald-border: rgba(52, 211, 153, 0.30);
  --emerald-bg: rgba(52, 211, 153, 0.10);
  --danger: #fecaca;
  --danger-border: rgba(239, 68, 68, 0.30);
  --danger-bg: rgba(239, 68, 68, 0.10);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--slate-950);
  color: var(--slate-100);
  min-height: 100vh;
}

.icon {
  flex-shrink: 0;
}

/* === Backdrop === */
.agency {
  position: relative;
  min-height: 100vh;
  overflow: hidden;
}

.agency-glow {
  pointer-events: none;
  position: absolute;
  inset: 0;
  background:
    radial-gradient(60% 50% at 50% 0%, rgba(56, 189, 248, 0.16), transparent 60%),
    radial-gradient(40% 40% at 12% 22%, rgba(232, 121, 249, 0.16), transparent 60%),
    radial-gradient(50% 50% at 88% 64%, rgba(34, 197, 94, 0.10), transparent 55%);
}

.agency-scanlines {
  pointer-events: none;
  position: absolute;
  inset: 0;
  opacity: 0.35;
  mix-blend-mode: soft-light;
  background: repeating-linear-gradient(
    to bottom,
    rgba(255, 255, 255, 0.07),
    rgba(255, 255, 255, 0.07) 1px,
    transparent 1px,
    transparent 4px
  );
  animation: scanlines 8s linear infinite;
}

@keyframes scanlines {
  from { background-position: 0 0; }
  to { background-position: 0 100px; }
}

/* === Debug Toggle === */
.icon-btn {
  display: grid;
  place-items: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 9999px;
  border: 1px solid var(--glass-border);
  background: var(--glass);
  color: var(--slate-300);
  cursor: pointer;
  backdrop-filter: blur(12px);
  transition: background var(--transition-fast);
}

.icon-btn:hover {
  background: var(--glass-hover);
}

.debug-toggle {
  position: absolute;
  top: 1rem;
  right: 1rem;
  z-index: 20;
}

/* === Card === */
.agency-shell {
  position: relative;
  z-index: 10;
  max-width: 48rem;
  min-height: 100vh;
  margin: 0 auto;
  padding: 3rem 1.25rem;
  display: flex;
  flex-direction: column;
  justify-content: center;
}

.agency-card {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  padding: 2rem;
  border-radius: 1.5rem;
  border: 1px solid var(--glass-border);
  background: var(--glass);
  box-shadow: 0 0 0 1px rgba(255, 255, 255, 0.04), 0 20px 80px rgba(0, 0, 0, 0.55);
  backdrop-filter: blur(40px);
}

.agency-header {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.agency-header-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.agency-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  border: 1px solid var(--glass-border);
  background: var(--glass-deep);
  font-size: 0.75rem;
  font-weight: 600;
  letter-spacing: 0.22em;
  color: var(--slate-300);
}

.agency-badge .icon {
  color: var(--emerald);
}

.agency-case-id {
  font-size: 0.75rem;
  font-weight: 600;
  letter-spacing: 0.22em;
  color: var(--slate-400);
}

.agency-title {
  font-size: 1.875rem;
  font-weight: 600;
  letter-spacing: 0.18em;
}

.agency-tagline {
  font-size: 0.875rem;
  color: var(--slate-300);
}

/* === Digits === */
.digit-board {
  display: flex;
  flex-wrap: wrap;
  align-items: flex-end;
  justify-content: center;
  gap: 1rem;
}

.digit-half {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
}

.digit-half-label {
  font-size: 0.7rem;
  font-weight: 600;
  letter-spacing: 0.28em;
}

.label-left { color: var(--fuchsia); }
.label-right { color: var(--cyan); }

.digit-group {
  display: flex;
  gap: 0.75rem;
}

.digit-slot {
  width: 3rem;
  height: 3.5rem;
  border-radius: 0.75rem;
  background: rgba(2, 6, 23, 0.35);
  text-align: center;
  font-family: var(--font-mono);
  font-size: 1.5rem;
  outline: none;
  backdrop-filter: blur(12px);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.digit-left {
  border: 1px solid var(--fuchsia-border);
  color: var(--fuchsia);
}

.digit-left:focus {
  border-color: rgba(240, 171, 252, 0.6);
  box-shadow: 0 0 0 2px var(--fuchsia-glow);
}

.digit-right {
  border: 1px solid var(--cyan-border);
  color: var(--cyan);
}

.digit-right:focus {
  border-color: rgba(165, 243, 252, 0.7);
  box-shadow: 0 0 0 2px var(--cyan-glow);
}

.digit-divider {
  width: 1px;
  height: 3rem;
  margin: 0 0.25rem;
  background: var(--glass-border);
}

/* === Secret Panel === */
.secret-panel {
  padding: 0.5rem 1rem;
  border-radius: 0.75rem;
  border: 1px solid var(--glass-border);
  background: var(--glass-deep);
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--slate-300);
}

.secret-code {
  color: var(--emerald);
}

/* === Protocol Button === */
.btn-protocol {
  position: relative;
  overflow: hidden;
  padding: 1rem 1.25rem;
  border-radius: 1rem;
  border: 1px solid var(--glass-border);
  background: var(--glass);
  color: inherit;
  text-align: left;
  cursor: pointer;
  backdrop-filter: blur(24px);
  transition: background var(--transition-fast);
}

.btn-protocol:hover {
  background: var(--glass-hover);
}

.btn-shine-track {
  pointer-events: none;
  position: absolute;
  inset: 0;
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.btn-protocol:hover .btn-shine-track {
  opacity: 1;
}

.btn-shine {
  position: absolute;
  top: -1.5rem;
  bottom: -1.5rem;
  width: 33%;
  background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.3), transparent);
  filter: blur(4px);
  animation: shine 1s linear infinite;
}

@keyframes shine {
  from { left: -100%; }
  to { left: 200%; }
}

.btn-protocol-body {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.btn-protocol-text {
  display: grid;
  gap: 0.25rem;
}

.btn-protocol-caption {
  font-size: 0.75rem;
  font-weight: 600;
  letter-spacing: 0.24em;
  color: var(--slate-300);
}

.btn-protocol-label {
  font-size: 1.125rem;
  font-weight: 600;
  letter-spacing: 0.14em;
}

.btn-protocol-icon {
  display: grid;
  place-items: center;
  width: 3rem;
  height: 3rem;
  border-radius: 0.75rem;
  border: 1px solid var(--emerald-border);
  background: var(--emerald-bg);
  color: var(--emerald);
}

/* === Status Banner === */
.status-banner {
  padding: 0.75rem 1rem;
  border-radius: 1rem;
  border: 1px solid var(--glass-border);
  background: var(--glass);
}

.status-headline {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 0.875rem;
  font-weight: 600;
  letter-spacing: 0.05em;
}

.status-idle { color: var(--slate-300); }

.status-error {
  border-color: var(--danger-border);
  background: var(--danger-bg);
  color: var(--danger);
}

.status-left {
  border-color: var(--fuchsia-border);
  background: rgba(232, 121, 249, 0.10);
  color: var(--fuchsia);
}

.status-right {
  border-color: var(--cyan-border);
  background: rgba(103, 232, 249, 0.10);
  color: var(--cyan);
}

.status-success {
  border-color: var(--emerald-border);
  background: var(--emerald-bg);
  color: var(--emerald);
}

/* Two names, same keyframes: switching class replays the animation */
.shake-odd { animation: shake-odd 0.5s cubic-bezier(.36, .07, .19, .97) both; }
.shake-even { animation: shake-even 0.5s cubic-bezier(.36, .07, .19, .97) both; }

@keyframes shake-odd {
  10%, 90% { transform: translate3d(-1px, 0, 0); }
  20%, 80% { transform: translate3d(2px, 0, 0); }
  30%, 50%, 70% { transform: translate3d(-4px, 0, 0); }
  40%, 60% { transform: translate3d(4px, 0, 0); }
}

@keyframes shake-even {
  10%, 90% { transform: translate3d(-1px, 0, 0); }
  20%, 80% { transform: translate3d(2px, 0, 0); }
  30%, 50%, 70% { transform: translate3d(-4px, 0, 0); }
  40%, 60% { transform: translate3d(4px, 0, 0); }
}

.reveal-box {
  margin-top: 0.75rem;
  padding: 0.75rem 1rem;
  border-radius: 0.75rem;
  border: 1px solid var(--glass-border);
  background: var(--glass-deep);
  font-family: var(--font-mono);
  font-size: 0.875rem;
  color: var(--slate-100);
}

.reveal-caret {
  display: inline-block;
  width: 0.5rem;
  height: 1rem;
  margin-left: 0.125rem;
  transform: translateY(2px);
  background: rgba(241, 245, 249, 0.8);
  animation: caret 1s steps(1) infinite;
}

@keyframes caret {
  50% { opacity: 0; }
}

/* === Footer === */
.session-footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  font-family: var(--font-mono);
  font-size: 0.75rem;
  letter-spacing: 0.18em;
  color: var(--slate-400);
}
"#;
