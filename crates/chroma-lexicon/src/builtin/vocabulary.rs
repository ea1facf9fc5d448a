//! Word lists: modifiers, entities, moods, context and language cues.

use chroma_model::{HarmonyType, Mood};

pub(super) const INTENSITY: &[(&str, f64)] = &[
    ("very", 0.3),
    ("extremely", 0.5),
    ("super", 0.4),
    ("ultra", 0.5),
    ("intense", 0.5),
    ("strong", 0.3),
    ("bold", 0.3),
    ("slightly", -0.3),
    ("subtle", -0.4),
    ("gentle", -0.3),
    ("muy", 0.3),
    ("intenso", 0.5),
    ("sutil", -0.4),
    ("ligeramente", -0.3),
];

pub(super) const TEMPERATURE: &[(&str, f64)] = &[
    ("warm", 0.5),
    ("hot", 0.7),
    ("cozy", 0.4),
    ("sunny", 0.4),
    ("fiery", 0.7),
    ("cool", -0.5),
    ("cold", -0.7),
    ("icy", -0.8),
    ("frozen", -0.8),
    ("chilly", -0.5),
    ("cálido", 0.5),
    ("calido", 0.5),
    ("caliente", 0.7),
    ("fresco", -0.4),
    ("frío", -0.7),
    ("frio", -0.7),
    ("helado", -0.8),
];

pub(super) const SATURATION: &[(&str, f64)] = &[
    ("vibrant", 0.6),
    ("vivid", 0.6),
    ("bright", 0.5),
    ("neon", 0.8),
    ("saturated", 0.7),
    ("electric", 0.5),
    ("rich", 0.4),
    ("bold", 0.4),
    ("soft", -0.4),
    ("pastel", -0.6),
    ("muted", -0.6),
    ("dull", -0.5),
    ("faded", -0.5),
    ("washed", -0.5),
    ("desaturated", -0.8),
    ("subtle", -0.4),
    ("dusty", -0.4),
    ("vibrante", 0.6),
    ("brillante", 0.5),
    ("suave", -0.4),
    ("apagado", -0.5),
    ("pálido", -0.4),
];

pub(super) const LIGHTNESS: &[(&str, f64)] = &[
    ("light", 0.4),
    ("bright", 0.3),
    ("pale", 0.5),
    ("airy", 0.4),
    ("luminous", 0.4),
    ("dark", -0.5),
    ("deep", -0.4),
    ("shadow", -0.4),
    ("night", -0.4),
    ("midnight", -0.6),
    ("moody", -0.3),
    ("dim", -0.3),
    ("claro", 0.4),
    ("luminoso", 0.4),
    ("oscuro", -0.5),
    ("profundo", -0.4),
    ("noche", -0.4),
    ("sombrío", -0.4),
];

pub(super) const EMOTIONS: &[(&str, &[&str])] = &[
    ("joy", &["happy", "joyful", "cheerful", "joy", "feliz", "alegre", "alegría", "contento"]),
    ("calm", &["calm", "peaceful", "serene", "tranquil", "relaxing", "relaxed", "zen", "soothing", "tranquilo", "sereno", "paz", "relajante", "calma"]),
    ("energy", &["energetic", "exciting", "dynamic", "lively", "energy", "energético", "dinámico", "emocionante"]),
    ("love", &["love", "romantic", "passion", "passionate", "amor", "romántico", "pasión"]),
    ("sadness", &["sad", "melancholy", "melancholic", "gloomy", "triste", "melancólico"]),
    ("mystery", &["mysterious", "mystery", "enigmatic", "misterioso", "misterio"]),
    ("elegance", &["elegant", "sophisticated", "refined", "classy", "elegante", "sofisticado", "refinado"]),
    ("confidence", &["confident", "powerful", "strong", "seguro", "poderoso", "fuerte"]),
    ("nostalgia", &["nostalgic", "nostalgia", "memories", "nostálgico"]),
    ("playfulness", &["playful", "fun", "whimsical", "quirky", "divertido", "juguetón"]),
    ("trust", &["trustworthy", "reliable", "trust", "confianza", "confiable"]),
    ("freshness", &["fresh", "crisp", "clean", "fresco", "limpio"]),
];

pub(super) const INDUSTRIES: &[(&str, &[&str])] = &[
    ("technology", &["tech", "technology", "software", "saas", "digital", "tecnología", "tecnologia", "informática"]),
    ("finance", &["finance", "financial", "bank", "banking", "fintech", "investment", "finanzas", "banco", "inversión"]),
    ("healthcare", &["health", "healthcare", "medical", "clinic", "hospital", "wellness", "salud", "médico", "clínica"]),
    ("education", &["education", "school", "learning", "university", "academy", "educación", "escuela", "universidad"]),
    ("food", &["food", "culinary", "kitchen", "bakery", "comida", "cocina", "gastronomía"]),
    ("fashion", &["fashion", "clothing", "apparel", "moda", "ropa"]),
    ("beauty", &["beauty", "cosmetics", "skincare", "makeup", "belleza", "cosméticos"]),
    ("travel", &["travel", "tourism", "vacation", "viaje", "turismo", "vacaciones"]),
    ("real-estate", &["realestate", "property", "housing", "inmobiliaria", "propiedad"]),
    ("entertainment", &["entertainment", "gaming", "games", "cinema", "film", "entretenimiento", "juegos", "cine"]),
    ("music", &["music", "band", "concert", "música", "musica", "concierto"]),
    ("art", &["art", "gallery", "artist", "arte", "galería", "artista"]),
    ("sports", &["sports", "fitness", "athletic", "deportes", "deportivo"]),
    ("environment", &["eco", "sustainable", "sustainability", "renewable", "ecológico", "sostenible"]),
    ("legal", &["legal", "law", "lawyer", "attorney", "abogado", "jurídico"]),
    ("luxury", &["luxury", "premium", "exclusive", "lujo", "exclusivo"]),
];

pub(super) const OBJECTS: &[&str] = &[
    "ocean", "flower", "tree", "mountain", "car", "coffee", "book", "wine", "beach", "moon",
    "sun", "star", "leaf", "city", "forest", "bird", "butterfly", "rose", "diamond", "candle",
    "building", "house", "cloud", "river", "desert", "garden", "fruit", "cake", "flor", "árbol",
    "montaña", "coche", "libro", "playa", "luna", "estrella", "hoja", "ciudad", "bosque",
    "pájaro", "mariposa", "diamante", "vela", "casa", "nube", "río", "desierto", "jardín",
    "fruta", "pastel",
];

pub(super) const BRAND_PERSONALITIES: &[(&str, &[&str])] = &[
    ("innovative", &["innovative", "cutting-edge", "modern", "futuristic", "innovador", "moderno", "vanguardia"]),
    ("trustworthy", &["trustworthy", "reliable", "dependable", "secure", "honest", "confiable", "fiable"]),
    ("playful", &["playful", "fun", "friendly", "quirky", "divertido", "amigable"]),
    ("luxurious", &["luxurious", "premium", "exclusive", "high-end", "luxury", "lujoso", "exclusivo"]),
    ("minimalist", &["minimalist", "minimal", "simple", "clean", "minimalista", "sencillo", "limpio"]),
    ("bold", &["bold", "daring", "edgy", "rebellious", "audaz", "atrevido"]),
    ("eco-friendly", &["eco-friendly", "sustainable", "ecological", "ecológico", "sostenible"]),
    ("professional", &["professional", "corporate", "expert", "profesional", "corporativo"]),
    ("creative", &["creative", "artistic", "imaginative", "creativo", "artístico"]),
];

/// Priority order: the first category with a hit becomes the use case.
pub(super) const USE_CASES: &[(&str, &[&str])] = &[
    ("website", &["website", "web", "webpage", "landing", "homepage", "sitio", "página", "pagina"]),
    ("blog", &["blog", "blogging"]),
    ("e-commerce", &["ecommerce", "e-commerce", "shop", "store", "tienda"]),
    ("mobile-app", &["app", "apps", "mobile", "ios", "android", "application", "aplicación", "aplicacion", "móvil", "movil"]),
    ("dashboard", &["dashboard", "admin", "analytics", "panel"]),
    ("game", &["game", "videogame", "juego"]),
    ("presentation", &["presentation", "slides", "deck", "pitch", "keynote", "presentación", "diapositivas"]),
    ("social-media", &["instagram", "social", "tiktok", "post", "redes"]),
    ("poster", &["poster", "flyer", "cartel", "afiche"]),
    ("illustration", &["illustration", "ilustración", "drawing"]),
    ("portfolio-site", &["portfolio", "portafolio"]),
    ("restaurant", &["restaurant", "restaurante", "bistro", "diner"]),
    ("cafe", &["cafe", "café", "cafetería", "coffeehouse"]),
    ("hotel", &["hotel", "resort", "hostel"]),
    ("boutique", &["boutique"]),
    ("bakery", &["bakery", "panadería", "pastelería"]),
    ("gym", &["gym", "gimnasio"]),
    ("spa", &["spa", "salon", "salón"]),
    ("agency", &["agency", "agencia", "studio", "estudio"]),
    ("startup", &["startup", "emprendimiento"]),
    ("wedding", &["wedding", "boda"]),
    ("tech-brand", &["tech", "technology", "software", "saas", "tecnología"]),
    ("finance-brand", &["finance", "bank", "fintech", "banco", "finanzas"]),
    ("health-brand", &["health", "healthcare", "medical", "clinic", "salud", "clínica"]),
    ("education-brand", &["education", "school", "university", "escuela"]),
    ("fashion-brand", &["fashion", "clothing", "moda"]),
];

/// Mood votes, in tie-break order.
pub(super) const MOOD_KEYWORDS: &[(Mood, &[&str])] = &[
    (Mood::Energetic, &["energetic", "energy", "vibrant", "neon", "electric", "cyberpunk", "dynamic", "exciting", "party", "lively", "festival", "intense", "energético", "vibrante", "eléctrico", "fiesta", "dinámico"]),
    (Mood::Calm, &["calm", "peaceful", "serene", "tranquil", "soft", "gentle", "relaxing", "dream", "dreamy", "zen", "quiet", "soothing", "tranquilo", "sereno", "suave", "paz", "sueño", "relajante"]),
    (Mood::Bold, &["bold", "strong", "powerful", "dramatic", "daring", "fierce", "striking", "audaz", "fuerte", "poderoso", "dramático"]),
    (Mood::Elegant, &["elegant", "luxury", "luxurious", "sophisticated", "refined", "classy", "chic", "elegante", "lujo", "lujoso", "sofisticado"]),
    (Mood::Playful, &["playful", "fun", "whimsical", "cheerful", "happy", "quirky", "candy", "divertido", "alegre", "feliz", "juguetón"]),
    (Mood::Natural, &["natural", "nature", "organic", "earthy", "forest", "garden", "botanical", "eco", "leaf", "naturaleza", "orgánico", "bosque", "jardín"]),
    (Mood::Mysterious, &["mysterious", "mystery", "dark", "gothic", "shadow", "enigmatic", "occult", "misterioso", "oscuro", "sombra"]),
    (Mood::Romantic, &["romantic", "love", "passion", "tender", "valentine", "romántico", "amor", "pasión"]),
    (Mood::Professional, &["professional", "corporate", "business", "clean", "trustworthy", "formal", "profesional", "corporativo", "empresa", "negocio"]),
    (Mood::Warm, &["warm", "cozy", "autumn", "sunset", "fiery", "cálido", "acogedor", "otoño", "atardecer"]),
    (Mood::Cool, &["cool", "icy", "winter", "frost", "arctic", "ocean", "frío", "invierno", "hielo"]),
];

pub(super) const HARMONY_KEYWORDS: &[(&str, HarmonyType)] = &[
    ("complementary", HarmonyType::Complementary),
    ("complementario", HarmonyType::Complementary),
    ("complementaria", HarmonyType::Complementary),
    ("analogous", HarmonyType::Analogous),
    ("análogo", HarmonyType::Analogous),
    ("analogo", HarmonyType::Analogous),
    ("triadic", HarmonyType::Triadic),
    ("triádico", HarmonyType::Triadic),
    ("triadico", HarmonyType::Triadic),
    ("tetradic", HarmonyType::Tetradic),
    ("tetrádico", HarmonyType::Tetradic),
    ("tetradico", HarmonyType::Tetradic),
    ("split", HarmonyType::SplitComplementary),
    ("split-complementary", HarmonyType::SplitComplementary),
    ("monochrome", HarmonyType::Monochromatic),
    ("monochromatic", HarmonyType::Monochromatic),
    ("monocromático", HarmonyType::Monochromatic),
    ("monocromatico", HarmonyType::Monochromatic),
    ("monocromo", HarmonyType::Monochromatic),
];

pub(super) const TEMPORAL_TERMS: &[&str] = &[
    "night", "midnight", "morning", "evening", "sunset", "sunrise", "dawn", "dusk", "twilight",
    "noon", "autumn", "winter", "summer", "spring", "season", "noche", "mañana", "tarde",
    "atardecer", "amanecer", "medianoche", "otoño", "invierno", "verano", "primavera",
    "crepúsculo",
];

pub(super) const ENVIRONMENTAL_TERMS: &[&str] = &[
    "ocean", "sea", "beach", "forest", "jungle", "mountain", "desert", "city", "urban", "street",
    "garden", "river", "lake", "sky", "space", "island", "countryside", "océano", "mar", "playa",
    "bosque", "selva", "montaña", "desierto", "ciudad", "calle", "jardín", "río", "lago",
    "cielo", "isla", "campo",
];

pub(super) const CONTEXT_TAGS: &[(&str, &str)] = &[
    ("night", "night"),
    ("midnight", "night"),
    ("noche", "night"),
    ("medianoche", "night"),
    ("evening", "evening"),
    ("dusk", "evening"),
    ("twilight", "evening"),
    ("sunset", "evening"),
    ("atardecer", "evening"),
    ("morning", "day"),
    ("dawn", "day"),
    ("sunrise", "day"),
    ("noon", "day"),
    ("mañana", "day"),
    ("amanecer", "day"),
    ("dark", "dark"),
    ("oscuro", "dark"),
    ("shadow", "dark"),
    ("gothic", "dark"),
    ("noir", "dark"),
    ("neon", "neon"),
    ("neón", "neon"),
    ("cyberpunk", "neon"),
    ("city", "urban"),
    ("urban", "urban"),
    ("street", "urban"),
    ("ciudad", "urban"),
    ("forest", "nature"),
    ("garden", "nature"),
    ("jungle", "nature"),
    ("bosque", "nature"),
    ("jardín", "nature"),
    ("ocean", "coastal"),
    ("beach", "coastal"),
    ("sea", "coastal"),
    ("playa", "coastal"),
    ("mar", "coastal"),
    ("winter", "winter"),
    ("invierno", "winter"),
    ("summer", "summer"),
    ("verano", "summer"),
    ("autumn", "autumn"),
    ("otoño", "autumn"),
    ("spring", "spring"),
    ("primavera", "spring"),
    ("retro", "retro"),
    ("vintage", "retro"),
];

pub(super) const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "of", "in", "on", "at", "to", "for", "with", "by", "from",
    "my", "our", "your", "is", "are", "be", "that", "this", "it", "as", "some", "el", "la",
    "los", "las", "un", "una", "unos", "unas", "de", "del", "y", "o", "en", "con", "para",
    "por", "que", "mi", "mis", "su", "sus", "es", "al",
];

pub(super) const ENGLISH_INDICATORS: &[&str] = &[
    "the", "and", "with", "for", "of", "a", "an", "in", "my", "is", "are", "very", "colors",
    "color", "palette", "like",
];

pub(super) const SPANISH_INDICATORS: &[&str] = &[
    "el", "la", "los", "las", "de", "del", "y", "con", "para", "en", "un", "una", "que", "mi",
    "es", "muy", "colores", "paleta", "como",
];
