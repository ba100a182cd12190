//! Global CSS styles for the biolink card.
//!
//! Class names match the ones emitted by `biolink-ui`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT (Backgrounds) */
  --night: #111827;
  --night-panel: rgba(31, 41, 55, 0.5);
  --night-panel-hover: rgba(31, 41, 55, 0.7);
  --night-glass: rgba(0, 0, 0, 0.3);

  /* NEON */
  --neon-blue: #3b82f6;
  --neon-sky: #60a5fa;
  --neon-purple: #9333ea;

  /* TEXT */
  --text-sky: #93c5fd;
  --text-primary: #d1d5db;
  --text-muted: #9ca3af;

  /* ACCENTS */
  --status-green: #4ade80;
  --zap-yellow: #facc15;
  --pin-red: #f87171;

  --font-sans: 'Inter', system-ui, sans-serif;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: var(--night);
  font-family: var(--font-sans);
  color: var(--text-primary);
}

/* === Stage === */
.stage {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  background-color: var(--night);
  background-size: cover;
  background-position: center;
}

/* === Card Shell === */
.biolink-card {
  position: relative;
  width: 100%;
  max-width: 28rem;
  padding: 1.5rem;
  overflow: hidden;
  border-radius: 1rem;
  border: 1px solid var(--neon-blue);
  background: var(--night-glass);
  backdrop-filter: blur(12px);
}

.biolink-card__glow {
  position: absolute;
  inset: 0;
  background: linear-gradient(to bottom right, var(--neon-blue), var(--neon-purple));
  opacity: 0.3;
  filter: blur(24px);
  animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

.biolink-card__content {
  position: relative;
  z-index: 10;
}

.biolink-card__header {
  display: flex;
  align-items: center;
  margin-bottom: 1rem;
}

.biolink-card__counter {
  display: flex;
  align-items: center;
  margin-left: 1rem;
}

.counter-value {
  font-size: 1.5rem;
  color: var(--text-sky);
}

.biolink-card__bio {
  margin-bottom: 1.5rem;
}

.biolink-card__name {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: 0.25rem;
  background: linear-gradient(to right, var(--neon-sky), #a855f7);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.biolink-card__tagline {
  font-size: 1.5rem;
  font-weight: 600;
  color: var(--text-sky);
  margin-bottom: 0.25rem;
}

.biolink-card__location {
  display: flex;
  align-items: center;
  font-size: 1.125rem;
}

/* === Profile Picture === */
.profile-picture {
  position: relative;
}

.profile-picture__img {
  border-radius: 9999px;
  border: 2px solid var(--neon-sky);
}

.profile-picture__dot {
  position: absolute;
  top: -0.25rem;
  right: -0.25rem;
  width: 1.5rem;
  height: 1.5rem;
  border-radius: 9999px;
  border: 2px solid #000;
  background: var(--status-green);
}

/* === Secondary Panel === */
.secondary-panel {
  background: var(--night-panel);
  border-radius: 0.5rem;
  padding: 1rem;
  margin-bottom: 1.5rem;
  transition: all 300ms;
}

.secondary-panel:hover {
  background: var(--night-panel-hover);
}

.secondary-panel__row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.secondary-panel__img,
.secondary-panel__avatar {
  border-radius: 9999px;
}

.group:hover .secondary-panel__avatar {
  animation: spin 1s linear infinite;
}

.secondary-panel__label,
.presence__username {
  font-size: 0.875rem;
  font-weight: 600;
  color: var(--neon-sky);
}

.presence__activity {
  font-size: 0.75rem;
  color: var(--text-primary);
}

.presence__details,
.presence__state {
  font-size: 0.75rem;
  color: var(--text-muted);
}

/* === Social Links === */
.social-links {
  display: flex;
  justify-content: center;
  gap: 1rem;
}

.social-link {
  padding: 0.5rem;
  border-radius: 9999px;
  background: #374151;
  color: var(--text-primary);
  transition: all 300ms;
}

.social-link:hover {
  background: #2563eb;
  color: #fff;
}

.group:hover .social-link__icon {
  animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

/* === Icons === */
.icon {
  display: inline-block;
  width: 1.5rem;
  height: 1.5rem;
  vertical-align: middle;
}

.icon--yellow { color: var(--zap-yellow); }
.icon--blue { color: var(--neon-sky); }
.icon--red { color: var(--pin-red); }

/* === Animations === */
.animate-pulse { animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite; }
.animate-ping { animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite; }
.animate-bounce { animation: bounce 1s infinite; }

@keyframes pulse {
  50% { opacity: 0.5; }
}

@keyframes ping {
  75%, 100% { transform: scale(2); opacity: 0; }
}

@keyframes bounce {
  0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
  50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
}

@keyframes spin {
  to { transform: rotate(360deg); }
}
"#;
