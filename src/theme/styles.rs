//! Global CSS styles for Heartfall.
//!
//! Valentine palette, frosted cards, and the particle keyframes. Each
//! particle node carries its sampled parameters as inline CSS custom
//! properties; the keyframes here read them back with `var()`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* ROSE (Primary accent) */
  --rose: #e11d48;
  --rose-soft: #f43f5e;
  --rose-glow: rgba(225, 29, 72, 0.3);
  --rose-border: #ffe4e6;

  /* PINK (Backgrounds, particle fill) */
  --valentine-pink: #ffc0cb;
  --blush: #fff1f2;
  --blush-deep: #fecdd3;

  /* TEXT */
  --text-rose: #9f1239;
  --text-rose-soft: rgba(159, 18, 57, 0.7);

  /* SURFACES */
  --card-bg: rgba(255, 255, 255, 0.7);

  /* Typography */
  --font-sans: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-control: 300ms ease;
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
  background: linear-gradient(180deg, var(--blush) 0%, var(--blush-deep) 100%);
  color: var(--text-rose);
  line-height: 1.6;
  min-height: 100vh;
  overflow-x: hidden;
}

.page {
  position: relative;
  width: 100%;
}

/* === Particle layer === */
/* Fixed overlay behind the sections; never intercepts input. */
.particle-layer {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 0;
  overflow: hidden;
}

/* Falling images: spawn above the viewport, tumble past the bottom. */
.falling-image {
  position: fixed;
  top: 0;
  border-radius: 50%;
  border: 4px solid #fff;
  box-shadow: 0 20px 40px rgba(159, 18, 57, 0.25);
  object-fit: cover;
  background: var(--valentine-pink);
  animation: falling-drop var(--fall-duration) linear forwards;
}

@keyframes falling-drop {
  from {
    transform: translateY(-150px) rotate(0deg);
    opacity: 0;
  }
  to {
    transform: translateY(110vh) rotate(360deg);
    opacity: 1;
  }
}

/* Floating hearts: drift down the whole viewport, swelling in and out. */
.floating-heart {
  position: fixed;
  top: 0;
  font-size: 2rem;
  animation: heart-drift var(--drift-duration) ease-in-out var(--drift-delay) both;
}

@keyframes heart-drift {
  0% {
    transform: translateY(-100vh) scale(0);
    opacity: 0;
  }
  30% {
    transform: translateY(-40vh) scale(1);
    opacity: 1;
  }
  70% {
    transform: translateY(40vh) scale(1);
    opacity: 1;
  }
  100% {
    transform: translateY(100vh) scale(0);
    opacity: 0;
  }
}

/* Burst images: thrown outward from the viewport center on "Yes".
   --end-x/--end-y carry the emission vector, --spin the total rotation. */
.burst-image {
  position: fixed;
  top: 0;
  left: 0;
  border-radius: 50%;
  border: 4px solid #fff;
  box-shadow: 0 20px 40px rgba(159, 18, 57, 0.25);
  object-fit: cover;
  background: var(--valentine-pink);
  animation: burst-out 2s ease-out forwards;
}

@keyframes burst-out {
  0% {
    transform: translate(50vw, 50vh) rotate(0deg) scale(0);
    opacity: 0;
  }
  35% {
    transform: translate(calc(50vw + var(--end-x) * 0.35), calc(50vh + var(--end-y) * 0.35))
      rotate(calc(var(--spin) * 0.35)) scale(1.2);
    opacity: 1;
  }
  70% {
    transform: translate(calc(50vw + var(--end-x) * 0.7), calc(50vh + var(--end-y) * 0.7))
      rotate(calc(var(--spin) * 0.7)) scale(1.2);
    opacity: 1;
  }
  100% {
    transform: translate(calc(50vw + var(--end-x)), calc(50vh + var(--end-y)))
      rotate(var(--spin)) scale(0);
    opacity: 0;
  }
}

/* Post-decision shower: bloom in and out at a fixed spot. */
.fading-image {
  position: fixed;
  border-radius: 50%;
  border: 4px solid #fff;
  box-shadow: 0 20px 40px rgba(159, 18, 57, 0.25);
  object-fit: cover;
  background: var(--valentine-pink);
  animation: image-bloom var(--bloom-duration) ease-in-out forwards;
}

@keyframes image-bloom {
  0% {
    transform: translate(-50%, -50%) scale(0);
    opacity: 0;
  }
  50% {
    transform: translate(-50%, -50%) scale(1);
    opacity: 0.8;
  }
  100% {
    transform: translate(-50%, -50%) scale(0);
    opacity: 0;
  }
}

.fading-heart {
  position: fixed;
  animation: heart-bloom var(--bloom-duration) ease-in-out forwards;
}

@keyframes heart-bloom {
  0% {
    transform: translate(-50%, -50%) scale(0);
    opacity: 0;
  }
  50% {
    transform: translate(-50%, -50%) scale(1);
    opacity: 0.9;
  }
  100% {
    transform: translate(-50%, -50%) scale(0);
    opacity: 0;
  }
}

/* === Sections === */
.section {
  position: relative;
  z-index: 10;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 5rem 1rem;
}

.section-heading {
  font-size: 3rem;
  font-weight: 900;
  color: var(--rose);
  text-align: center;
  margin-bottom: 4rem;
}

.frosted-card {
  background: var(--card-bg);
  backdrop-filter: blur(40px);
  -webkit-backdrop-filter: blur(40px);
  border: 1px solid var(--rose-border);
  border-radius: 1.5rem;
  box-shadow: 0 10px 40px rgba(159, 18, 57, 0.12);
}

/* === Letter section === */
.letter-section {
  background-size: cover;
  background-position: center;
}

.letter-wrap {
  position: relative;
  width: 100%;
  max-width: 56rem;
  animation: scale-in 0.6s ease both;
}

.letter-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
  padding: 3rem;
  text-align: center;
  border-radius: 2rem;
}

.letter-glyph {
  font-size: 3.5rem;
}

.letter-heading {
  font-size: 3rem;
  font-weight: 900;
  color: var(--rose);
}

.letter-body {
  font-size: 1.125rem;
  color: var(--text-rose-soft);
}

.cupid {
  position: absolute;
  top: -180px;
  left: -120px;
  width: 320px;
  height: 320px;
  object-fit: contain;
  z-index: 20;
  animation: hover-float 3s ease-in-out infinite;
}

.bounce-arrow {
  font-size: 2.5rem;
  color: var(--rose);
  animation: bounce 2s ease-in-out infinite;
}

@keyframes bounce {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(10px); }
}

@keyframes hover-float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-20px); }
}

@keyframes scale-in {
  from {
    transform: scale(0.8);
    opacity: 0;
  }
  to {
    transform: scale(1);
    opacity: 1;
  }
}

/* === Timeline section === */
.timeline-list {
  display: flex;
  flex-direction: column;
  gap: 3rem;
  width: 100%;
  max-width: 56rem;
}

.timeline-entry {
  display: flex;
  align-items: center;
  gap: 2rem;
  width: 100%;
  animation: fade-up 0.6s ease both;
}

.timeline-entry.reverse {
  flex-direction: row-reverse;
}

.timeline-card {
  flex: 1;
  padding: 1.5rem;
}

.timeline-date {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--rose);
  margin-bottom: 0.5rem;
}

.timeline-desc {
  color: var(--text-rose-soft);
}

.timeline-badge {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
  background: var(--rose);
  color: #fff;
  font-size: 1.25rem;
  font-weight: 700;
  flex-shrink: 0;
}

@keyframes fade-up {
  from {
    transform: translateY(30px);
    opacity: 0;
  }
  to {
    transform: translateY(0);
    opacity: 1;
  }
}

/* === Memories section === */
.memories-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1.5rem;
  width: 100%;
  max-width: 72rem;
}

.memory-tile {
  aspect-ratio: 1;
  width: 100%;
  border-radius: 1rem;
  overflow: hidden;
  border: 2px solid var(--rose-border);
  box-shadow: 0 10px 30px rgba(159, 18, 57, 0.12);
  background: linear-gradient(135deg, var(--valentine-pink), var(--blush-deep));
  animation: scale-in 0.5s ease both;
  animation-delay: calc(var(--tile-index) * 100ms);
}

.memory-tile img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

/* === Question card === */
.question-card {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  width: 100%;
  max-width: 36rem;
  padding: 4rem 2rem;
  text-align: center;
  border-radius: 3.5rem;
  box-shadow: 0 20px 70px var(--rose-glow);
  animation: card-float 4s ease-in-out infinite;
}

@keyframes card-float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-10px); }
}

.question-cat {
  position: absolute;
  top: -64px;
  right: -48px;
  width: 180px;
  height: 120px;
  object-fit: contain;
}

.question-tagline {
  font-size: 0.875rem;
  font-weight: 700;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--rose);
  opacity: 0.6;
}

.question-heading {
  font-size: 3rem;
  font-weight: 900;
  line-height: 1.1;
  letter-spacing: -0.02em;
  margin-top: 0.5rem;
}

.question-buttons {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  margin-top: 2.5rem;
  flex-wrap: wrap;
  justify-content: center;
}

/* Yes grows with every No click; size comes from inline style. */
.btn-yes {
  display: flex;
  align-items: center;
  justify-content: center;
  border: none;
  border-radius: 9999px;
  background: var(--rose);
  color: #fff;
  font-weight: 700;
  cursor: pointer;
  box-shadow: 0 10px 30px var(--rose-glow);
}

.btn-yes:hover {
  filter: brightness(1.1);
}

.btn-yes:active {
  transform: scale(0.9);
}

/* No shrinks, dims, and jumps; geometry comes from inline style. */
.btn-no {
  display: flex;
  align-items: center;
  justify-content: center;
  border: 2px solid rgba(225, 29, 72, 0.2);
  border-radius: 9999px;
  padding: 0 2rem;
  background: transparent;
  color: var(--rose);
  font-weight: 700;
  cursor: pointer;
  transition: transform var(--transition-control), opacity var(--transition-control);
}

.btn-no:hover {
  background: var(--rose);
  color: #fff;
}

/* === Celebration view === */
.celebration {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
  animation: scale-in 0.6s ease both;
}

.celebration-photo-wrap {
  position: relative;
}

.celebration-photo {
  display: block;
  width: 320px;
  border-radius: 1.5rem;
  border: 8px solid #fff;
  margin: 0 auto;
}

.gift-emoji {
  position: absolute;
  top: -20px;
  font-size: 2.5rem;
  animation: spin-in 0.5s ease both;
}

.gift-emoji.left {
  left: -20px;
  animation-delay: 0.3s;
}

.gift-emoji.right {
  right: -20px;
  animation-delay: 0.4s;
}

@keyframes spin-in {
  from {
    transform: scale(0) rotate(-180deg);
  }
  to {
    transform: scale(1) rotate(0deg);
  }
}

.celebration-text {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  animation: fade-up 0.5s ease 0.5s both;
}

.celebration-heading {
  font-size: 3rem;
  font-weight: 900;
  letter-spacing: -0.02em;
  background-image: linear-gradient(to right, var(--rose), var(--rose-soft), var(--rose));
  background-clip: text;
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.celebration-divider {
  height: 2px;
  width: 6rem;
  border-radius: 9999px;
  background: linear-gradient(to right, transparent, var(--rose), transparent);
}

.celebration-promise {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--rose);
}

.celebration-dedication {
  font-size: 1.125rem;
  font-style: italic;
  color: var(--rose-soft);
  opacity: 0.8;
}
"#;
