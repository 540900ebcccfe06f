//! The static product catalog and the Curator persona. Loaded once, never
//! mutated; the showcase renders from it and the chat client serializes a
//! summary of it into the model's system instruction.

use serde::Serialize;

// GLB assets for the 3D/AR viewer, sourced from model-viewer and Khronos
// sample collections.
const CHAIR_MODEL_FABRIC: &str = "https://modelviewer.dev/shared-assets/models/SheenChair.glb";
const CHAIR_MODEL_WOOD: &str = "https://modelviewer.dev/shared-assets/models/Chair.glb";
const SOFA_MODEL: &str = "https://raw.githubusercontent.com/KhronosGroup/glTF-Sample-Models/master/2.0/GlamVelvetSofa/glTF-Binary/GlamVelvetSofa.glb";
const SURREAL_OBJECT_1: &str = "https://modelviewer.dev/shared-assets/models/Mixer.glb";
const SURREAL_OBJECT_2: &str = "https://raw.githubusercontent.com/KhronosGroup/glTF-Sample-Models/master/2.0/DamagedHelmet/glTF-Binary/DamagedHelmet.glb";

/// The chat assistant's fixed persona.
pub struct Persona {
    pub name: &'static str,
    pub tone: &'static str,
    pub manifesto: &'static str,
    pub material_specs: &'static str,
}

pub const PERSONA: Persona = Persona {
    name: "The Curator",
    tone: "Sophisticated, slightly nihilistic, high-end, architectural, knowledgeable.",
    manifesto: "\
1. Furniture is a burden. It rots, fades, and demands attention.\n\
2. The Cover is the ideal form. It is protection, mystery, and permanence.\n\
3. We do not sell covers to hide furniture; we sell furniture to give our covers shape.\n\
4. An empty patio is a tragedy. A covered patio is a sculpture.\n\
5. Longevity is the only metric that matters.",
    material_specs: "Heavy-weight marine grade solution-dyed acrylic. Hand-stitched \
architectural seams. Hydrophobic coating. Matte finish. No plastic sheen.",
};

/// Greeting seeded into every fresh chat transcript.
pub const GREETING: &str = "Greetings. I am the Curator. I can assist with dimensions, \
pricing, or existential questions regarding your patio furniture.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CoverType {
    Chair,
    Sofa,
    Table,
}

impl CoverType {
    pub fn label(self) -> &'static str {
        match self {
            CoverType::Chair => "CHAIR",
            CoverType::Sofa => "SOFA",
            CoverType::Table => "TABLE",
        }
    }

    /// Nominal footprint quoted to the chat model for fit questions.
    pub fn nominal_dimensions(self) -> &'static str {
        match self {
            CoverType::Chair => "32\"W x 35\"D x 30\"H",
            CoverType::Sofa => "84\"W x 35\"D x 30\"H",
            CoverType::Table => "48\" Round x 29\"H",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Dimensions {
    pub width: &'static str,
    pub height: &'static str,
    pub depth: &'static str,
}

/// A piece of furniture compatible with a cover ("compatible filler").
#[derive(Clone, Copy, Debug)]
pub struct FurnitureOption {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub material: &'static str,
    pub image: &'static str,
    pub model_url: &'static str,
    pub dimensions: Dimensions,
}

/// A cover product and the furniture it gives shape to.
#[derive(Clone, Copy, Debug)]
pub struct CoverProduct {
    pub id: &'static str,
    pub kind: CoverType,
    pub name: &'static str,
    pub description: &'static str,
    pub cover_image: &'static str,
    pub wireframe_image: &'static str,
    pub options: &'static [FurnitureOption],
}

pub const COVERS: &[CoverProduct] = &[
    CoverProduct {
        id: "c1",
        kind: CoverType::Chair,
        name: "The Solitary Sentry",
        description: "A cover designed for deep introspection and wide armrests.",
        cover_image:
            "https://images.unsplash.com/photo-1524758631624-e2822e304c36?q=80&w=800&auto=format&fit=crop",
        wireframe_image:
            "https://images.unsplash.com/photo-1592078615290-033ee584e267?q=80&w=800&auto=format&fit=crop",
        options: &[
            FurnitureOption {
                id: "f1-a",
                name: "Teak Lounger",
                price: 899,
                material: "Solid Teak",
                image:
                    "https://images.unsplash.com/photo-1592078615290-033ee584e267?q=80&w=800&auto=format&fit=crop",
                model_url: CHAIR_MODEL_WOOD,
                dimensions: Dimensions { width: "32\"", height: "35\"", depth: "30\"" },
            },
            FurnitureOption {
                id: "f1-b",
                name: "Wicker Shell",
                price: 650,
                material: "All-weather Wicker",
                image:
                    "https://images.unsplash.com/photo-1519947486511-46149fa0a254?q=80&w=800&auto=format&fit=crop",
                model_url: CHAIR_MODEL_FABRIC,
                dimensions: Dimensions { width: "28\"", height: "32\"", depth: "29\"" },
            },
            FurnitureOption {
                id: "f1-c",
                name: "Aluminum Throne",
                price: 1200,
                material: "Powder-coated Aluminum",
                image:
                    "https://images.unsplash.com/photo-1592078615290-033ee584e267?q=80&w=800&auto=format&fit=crop",
                model_url: CHAIR_MODEL_FABRIC,
                dimensions: Dimensions { width: "34\"", height: "40\"", depth: "34\"" },
            },
        ],
    },
    CoverProduct {
        id: "c2",
        kind: CoverType::Sofa,
        name: "The Deep Seating Void",
        description: "Holds the space for conversations that haven't happened yet.",
        cover_image:
            "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?q=80&w=800&auto=format&fit=crop",
        wireframe_image:
            "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?q=80&w=800&auto=format&fit=crop",
        options: &[
            FurnitureOption {
                id: "f2-a",
                name: "Modular Cloud",
                price: 2400,
                material: "Performance Fabric",
                image:
                    "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?q=80&w=800&auto=format&fit=crop",
                model_url: SOFA_MODEL,
                dimensions: Dimensions { width: "84\"", height: "30\"", depth: "35\"" },
            },
            FurnitureOption {
                id: "f2-b",
                name: "Rattan Estate",
                price: 1800,
                material: "Natural Rattan",
                image:
                    "https://images.unsplash.com/photo-1617806118233-18e1de247200?q=80&w=800&auto=format&fit=crop",
                model_url: SOFA_MODEL,
                dimensions: Dimensions { width: "76\"", height: "32\"", depth: "32\"" },
            },
            FurnitureOption {
                id: "f2-c",
                name: "Minimalist Bench",
                price: 1100,
                material: "Concrete & Wood",
                image:
                    "https://images.unsplash.com/photo-1524758631624-e2822e304c36?q=80&w=800&auto=format&fit=crop",
                model_url: SOFA_MODEL,
                dimensions: Dimensions { width: "60\"", height: "18\"", depth: "16\"" },
            },
        ],
    },
    CoverProduct {
        id: "c3",
        kind: CoverType::Table,
        name: "The Feast Preserver",
        description: "Keeps the rain off a dinner party that exists only in your mind.",
        cover_image:
            "https://images.unsplash.com/photo-1533090368676-1fd25485db88?q=80&w=800&auto=format&fit=crop",
        wireframe_image:
            "https://images.unsplash.com/photo-1611486212557-88be5ff6f941?q=80&w=800&auto=format&fit=crop",
        options: &[
            FurnitureOption {
                id: "f3-a",
                name: "Farmhouse Oak",
                price: 1500,
                material: "Reclaimed Oak",
                image:
                    "https://images.unsplash.com/photo-1577140917170-285929055b42?q=80&w=800&auto=format&fit=crop",
                model_url: SURREAL_OBJECT_1,
                dimensions: Dimensions { width: "48\"", height: "29\"", depth: "48\"" },
            },
            FurnitureOption {
                id: "f3-b",
                name: "Glass Modern",
                price: 900,
                material: "Tempered Glass",
                image:
                    "https://images.unsplash.com/photo-1533090368676-1fd25485db88?q=80&w=800&auto=format&fit=crop",
                model_url: SURREAL_OBJECT_2,
                dimensions: Dimensions { width: "52\"", height: "30\"", depth: "30\"" },
            },
            FurnitureOption {
                id: "f3-c",
                name: "Stone Round",
                price: 2100,
                material: "Limestone",
                image:
                    "https://images.unsplash.com/photo-1611486212557-88be5ff6f941?q=80&w=800&auto=format&fit=crop",
                model_url: SURREAL_OBJECT_2,
                dimensions: Dimensions { width: "60\"", height: "30\"", depth: "60\"" },
            },
        ],
    },
];

#[derive(Serialize)]
struct InventoryEntry {
    name: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    description: &'static str,
    dimensions: &'static str,
    #[serde(rename = "priceRange")]
    price_range: String,
    materials: String,
}

/// JSON summary of the catalog injected into the chat system instruction as
/// the model's knowledge base.
pub fn inventory_context() -> String {
    let entries: Vec<InventoryEntry> = COVERS
        .iter()
        .map(|cover| InventoryEntry {
            name: cover.name,
            kind: cover.kind.label(),
            description: cover.description,
            dimensions: cover.kind.nominal_dimensions(),
            price_range: cover
                .options
                .iter()
                .map(|o| o.price.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            materials: cover
                .options
                .iter()
                .map(|o| o.material)
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    // A Vec of plain string fields cannot fail to serialize.
    serde_json::to_string(&entries).unwrap_or_default()
}
