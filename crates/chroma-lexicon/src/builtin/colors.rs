//! Concept colors, synonyms and compound phrases.

/// `(term, hue, saturation, lightness)`
pub(super) const COLORS: &[(&str, u16, u8, u8)] = &[
    // Basic color names
    ("red", 0, 85, 50),
    ("crimson", 348, 83, 47),
    ("scarlet", 8, 90, 50),
    ("burgundy", 345, 70, 28),
    ("maroon", 0, 60, 25),
    ("pink", 340, 80, 75),
    ("rose", 345, 70, 65),
    ("coral", 16, 100, 66),
    ("salmon", 6, 93, 71),
    ("orange", 30, 95, 55),
    ("peach", 28, 100, 80),
    ("amber", 45, 100, 50),
    ("gold", 45, 85, 50),
    ("golden", 43, 80, 55),
    ("yellow", 55, 95, 55),
    ("lemon", 54, 100, 62),
    ("mustard", 48, 75, 45),
    ("cream", 45, 70, 92),
    ("beige", 40, 35, 82),
    ("ivory", 60, 60, 95),
    ("brown", 25, 55, 35),
    ("tan", 34, 45, 65),
    ("sand", 38, 45, 75),
    ("green", 120, 60, 40),
    ("lime", 90, 80, 55),
    ("olive", 60, 45, 35),
    ("mint", 150, 55, 80),
    ("sage", 100, 18, 60),
    ("emerald", 140, 70, 40),
    ("jade", 155, 55, 45),
    ("teal", 180, 65, 35),
    ("turquoise", 174, 72, 56),
    ("cyan", 185, 90, 50),
    ("aqua", 180, 80, 60),
    ("blue", 220, 80, 50),
    ("navy", 225, 70, 22),
    ("cobalt", 215, 100, 38),
    ("azure", 205, 90, 55),
    ("indigo", 255, 60, 35),
    ("violet", 270, 75, 60),
    ("purple", 275, 55, 50),
    ("lavender", 270, 45, 78),
    ("lilac", 285, 45, 75),
    ("plum", 300, 40, 40),
    ("magenta", 300, 90, 55),
    ("fuchsia", 315, 95, 55),
    ("black", 0, 0, 8),
    ("white", 0, 0, 98),
    ("gray", 0, 0, 50),
    ("grey", 0, 0, 52),
    ("silver", 210, 10, 75),
    ("charcoal", 210, 12, 22),
    ("slate", 215, 20, 40),
    // Spanish color names
    ("rojo", 0, 85, 50),
    ("azul", 220, 80, 50),
    ("verde", 120, 60, 40),
    ("amarillo", 55, 95, 55),
    ("naranja", 30, 95, 55),
    ("morado", 275, 55, 50),
    ("rosa", 340, 80, 75),
    ("negro", 0, 0, 8),
    ("blanco", 0, 0, 98),
    ("gris", 0, 0, 50),
    ("dorado", 45, 85, 50),
    ("plateado", 210, 10, 75),
    ("marrón", 25, 55, 35),
    ("turquesa", 174, 72, 56),
    ("celeste", 200, 75, 75),
    // Nature and landscape
    ("ocean", 200, 80, 45),
    ("beach", 42, 65, 75),
    ("wave", 195, 70, 55),
    ("lagoon", 180, 70, 50),
    ("river", 195, 55, 45),
    ("lake", 205, 50, 50),
    ("forest", 140, 55, 28),
    ("jungle", 130, 65, 30),
    ("tree", 110, 45, 35),
    ("leaf", 100, 60, 42),
    ("grass", 95, 60, 45),
    ("flower", 330, 65, 70),
    ("blossom", 340, 70, 85),
    ("garden", 120, 45, 50),
    ("desert", 35, 60, 65),
    ("mountain", 210, 20, 45),
    ("stone", 30, 10, 55),
    ("earth", 30, 40, 35),
    ("snow", 200, 30, 96),
    ("ice", 190, 60, 88),
    ("glacier", 190, 50, 80),
    ("fire", 15, 95, 50),
    ("sun", 48, 100, 60),
    ("sky", 200, 80, 70),
    ("cloud", 210, 20, 90),
    ("rain", 210, 25, 55),
    ("storm", 220, 25, 30),
    ("tropical", 160, 80, 50),
    // Time of day and seasons
    ("sunset", 20, 85, 60),
    ("sunrise", 35, 90, 70),
    ("dawn", 30, 70, 80),
    ("dusk", 260, 35, 40),
    ("twilight", 250, 40, 35),
    ("night", 240, 50, 15),
    ("midnight", 235, 60, 12),
    ("moon", 220, 20, 85),
    ("star", 50, 90, 85),
    ("autumn", 25, 80, 45),
    ("winter", 200, 40, 90),
    ("summer", 45, 95, 60),
    ("spring", 100, 60, 70),
    // Urban and aesthetic
    ("city", 220, 15, 35),
    ("neon", 320, 100, 55),
    ("cyberpunk", 300, 100, 50),
    ("electric", 190, 100, 50),
    ("futuristic", 190, 80, 55),
    ("industrial", 210, 8, 40),
    ("retro", 20, 60, 55),
    ("vintage", 30, 35, 60),
    ("rustic", 25, 45, 40),
    ("minimal", 0, 0, 95),
    ("pastel", 330, 60, 85),
    ("metallic", 210, 15, 65),
    ("royal", 250, 70, 35),
    ("luxury", 45, 70, 45),
    ("velvet", 345, 60, 30),
    ("candy", 330, 85, 75),
    ("dream", 250, 35, 80),
    ("fantasy", 290, 60, 70),
    ("magic", 280, 70, 50),
    ("galaxy", 260, 70, 25),
    ("space", 240, 60, 12),
    ("cosmic", 270, 65, 30),
    // Food and drink
    ("wine", 345, 65, 30),
    ("cherry", 350, 80, 45),
    ("berry", 330, 60, 45),
    ("strawberry", 355, 85, 55),
    ("blueberry", 230, 60, 45),
    ("grape", 280, 50, 40),
    ("apple", 5, 80, 50),
    ("tomato", 5, 85, 50),
    ("watermelon", 350, 75, 60),
    ("avocado", 80, 45, 45),
    ("pistachio", 85, 40, 70),
    ("honey", 40, 90, 55),
    ("vanilla", 45, 70, 88),
    ("caramel", 32, 70, 50),
    ("cinnamon", 25, 60, 40),
    ("chocolate", 25, 75, 28),
    ("coffee", 25, 45, 30),
    ("mocha", 20, 35, 30),
    ("latte", 30, 35, 70),
    ("matcha", 90, 45, 55),
];

/// Canonical term to synonyms in either language.
pub(super) const SYNONYMS: &[(&str, &[&str])] = &[
    ("ocean", &["sea", "marine", "oceanic", "mar", "océano", "oceano"]),
    ("sky", &["heavens", "cielo"]),
    ("forest", &["woods", "woodland", "bosque"]),
    ("jungle", &["rainforest", "selva"]),
    ("fire", &["flame", "blaze", "fuego", "llama"]),
    ("sunset", &["sundown", "atardecer", "ocaso"]),
    ("sunrise", &["amanecer"]),
    ("dawn", &["alba", "madrugada"]),
    ("night", &["nighttime", "nocturnal", "noche"]),
    ("midnight", &["medianoche"]),
    ("city", &["urban", "metropolis", "downtown", "ciudad", "urbano"]),
    ("purple", &["púrpura", "purpura"]),
    ("violet", &["violeta"]),
    ("lavender", &["lavanda"]),
    ("pink", &["rosado"]),
    ("gold", &["oro"]),
    ("silver", &["plata"]),
    ("snow", &["nieve", "snowy"]),
    ("ice", &["hielo"]),
    ("moon", &["luna", "lunar", "moonlight"]),
    ("sun", &["sol", "solar", "sunny", "sunshine"]),
    ("star", &["estrella", "stellar", "starry"]),
    ("flower", &["floral", "flor", "flores", "bloom"]),
    ("cherry", &["cereza"]),
    ("wine", &["vino"]),
    ("coffee", &["café", "cafe", "espresso"]),
    ("chocolate", &["cacao", "cocoa"]),
    ("beach", &["playa", "shore", "coast", "costa", "seaside"]),
    ("desert", &["desierto", "dunes"]),
    ("mountain", &["montaña", "montana", "peak"]),
    ("rain", &["lluvia", "rainy"]),
    ("storm", &["tormenta", "stormy", "thunder"]),
    ("earth", &["tierra", "earthy", "soil"]),
    ("autumn", &["fall", "otoño", "otono"]),
    ("winter", &["invierno"]),
    ("summer", &["verano"]),
    ("spring", &["primavera"]),
    ("tropical", &["tropic", "trópico", "tropico"]),
    ("dream", &["dreamy", "dreamlike", "sueño", "sueno", "sueños"]),
    ("galaxy", &["galaxia", "nebula"]),
    ("space", &["espacio", "outer-space"]),
    ("magic", &["magical", "mágico", "magico"]),
    ("luxury", &["luxurious", "lujo", "lujoso"]),
    ("vintage", &["antique", "clásico", "clasico"]),
    ("neon", &["neón", "fluorescent"]),
    ("electric", &["eléctrico", "electrico"]),
    ("futuristic", &["futurista", "future"]),
    ("honey", &["miel"]),
    ("mint", &["menta"]),
    ("sand", &["arena", "sandy"]),
    ("grass", &["césped", "cesped", "hierba"]),
    ("leaf", &["leaves", "foliage", "hoja", "hojas"]),
    ("cloud", &["nube", "cloudy"]),
    ("wave", &["ola", "surf"]),
    ("river", &["río", "rio"]),
    ("lake", &["lago"]),
    ("stone", &["piedra", "rock"]),
    ("candy", &["dulce", "sweets"]),
];

/// `(phrase, hue, saturation, lightness)`
pub(super) const COMPOUNDS: &[(&str, u16, u8, u8)] = &[
    ("ocean breeze", 190, 60, 70),
    ("sunset glow", 25, 90, 60),
    ("forest green", 140, 60, 30),
    ("midnight blue", 235, 65, 20),
    ("cherry blossom", 345, 60, 85),
    ("northern lights", 160, 80, 55),
    ("desert sand", 38, 50, 72),
    ("tropical paradise", 170, 80, 50),
    ("autumn leaves", 25, 80, 45),
    ("rose gold", 15, 50, 70),
    ("sky blue", 200, 75, 70),
    ("deep sea", 210, 80, 25),
    ("neon lights", 310, 100, 55),
    ("neon city", 290, 90, 45),
    ("golden hour", 38, 90, 60),
    ("cotton candy", 320, 70, 85),
    ("blood moon", 5, 75, 35),
    ("electric blue", 200, 100, 50),
    ("hot pink", 330, 100, 60),
    ("baby blue", 205, 70, 80),
    ("royal blue", 225, 75, 40),
    ("olive green", 60, 45, 35),
    ("coffee shop", 25, 40, 35),
    ("puesta de sol", 20, 85, 60),
    ("azul marino", 225, 70, 22),
    ("verde bosque", 140, 55, 28),
    ("luz de luna", 220, 25, 85),
    ("flor de cerezo", 345, 60, 85),
    ("atardecer dorado", 35, 90, 60),
    ("cielo nocturno", 235, 55, 15),
    ("arena del desierto", 38, 50, 72),
];
