//! Table générale: code de classe MTK -> tags OSM
//!
//! Les classes routières figurent aussi ici avec leurs tags historiques,
//! mais la table routière ([`super::road::ROAD_RULES`]) les masque.
//! Un code associé à `NONE` est connu mais ne produit aucun tag (symboles,
//! légendes sans équivalent OSM).

use super::{railway, survey, text, Rule};

const NONE: Rule = Rule::Tags(&[]);

pub static GENERAL_RULES: &[(u32, Rule)] = &[
    // --- Remarques
    // Huomaute
    (3001, NONE),

    // --- Liikenne: voirie, voies ferrées, navigation
    // Kulkukorkeusrajoitteen korkeus
    (10111, Rule::Derived(text::max_height)),
    // Autotien nimi
    (12101, NONE),
    // Autotien siltanumero
    (12105, NONE),
    // Autotien lauttanumero
    (12106, NONE),
    // Autotie Ia
    (12111, Rule::Tags(&[("highway", "motorway"), ("oneway", "yes")])),
    // Autotie Ib
    (12112, Rule::Tags(&[("highway", "road")])),
    // Autotie IIa
    (12121, Rule::Tags(&[("highway", "road")])),
    // Autotie IIb
    (12122, Rule::Tags(&[("highway", "road")])),
    // Autotie IIIa
    (12131, Rule::Tags(&[("highway", "road")])),
    // Autotie IIIb
    (12132, Rule::Tags(&[("highway", "road")])),
    // Ajotie
    (12141, Rule::Tags(&[("highway", "road")])),
    // Lautta
    (12151, Rule::Tags(&[("route", "ferry")])),
    // Lossi
    (12152, Rule::Tags(&[("route", "ferry"), ("type", "cable")])),
    // Paikallistien numero
    (12181, NONE),
    // Maantien numero
    (12182, NONE),
    // E- valta- tai kantatien numero
    (12183, NONE),
    // Lauttasymboli
    (12192, NONE),
    // Lossisymboli
    (12193, NONE),
    // Esterakennelma
    (12200, NONE),
    // Kulkuväylän nimi
    (12301, NONE),
    // Kulkuväylän selite
    (12302, NONE),
    // Talvitie
    (12312, Rule::Tags(&[("highway", "road"), ("winter_road", "yes")])),
    // Polku
    (12313, Rule::Tags(&[("highway", "path")])),
    // Kävely- ja pyörätie
    (12314, Rule::Tags(&[("highway", "cycleway"), ("foot", "designated")])),
    // Ajopolku
    (12316, Rule::Tags(&[("highway", "track")])),
    // Kevytväylän alikulkusymboli
    (12391, NONE),
    // Rautatie (tallennettu alaluokkiin)
    (14110, Rule::Derived(railway::rail)),
    // Rautatie, sähköistetty
    (14111, Rule::Derived(railway::electrified_rail)),
    // Rautatie, sähköistämätön
    (14112, Rule::Derived(railway::non_electrified_rail)),
    // Kapearaiteinen rautatie
    (14121, Rule::Derived(railway::narrow_gauge)),
    // Metro
    (14131, Rule::Derived(railway::subway)),
    // Rautatie, sähköistyssymboli
    (14191, NONE),
    // Rautatie, käytöstä poistetun symboli
    (14192, NONE),
    // Rautatieliikennepaikka
    (14200, NONE),
    // Rautatieliikennepaikan nimi
    (14201, NONE),
    // Turvalaitteen nimi
    (16101, NONE),
    // Turvalaitteen selite
    (16102, NONE),
    // Kummeli
    (
        16121,
        Rule::Tags(&[
            ("seamark:type", "beacon_special_purpose"),
            ("seamark:beacon_special_purpose:shape", "cairn"),
        ]),
    ),
    // Tunnusmajakka
    (16122, Rule::Tags(&[("man_made", "lighthouse")])),
    // Merimajakka
    (
        16126,
        Rule::Tags(&[
            ("man_made", "lighthouse"),
            ("seamark:type", "landmark"),
            ("seamark:category", "tower"),
        ]),
    ),
    // Valaistu reunamerkki, vasen (poist. kohde)
    (16211, NONE),
    // Valaistu reunamerkki, oikea (poist. kohde)
    (16212, NONE),
    // Valaistu reunamerkki, pohjois (poist. kohde)
    (16213, NONE),
    // Valaistu reunamerkki, etelä (poist. kohde)
    (16214, NONE),
    // Valaistu reunamerkki, itä (poist. kohde)
    (16215, NONE),
    // Valaistu reunamerkki, länsi (poist. kohde)
    (16216, NONE),
    // Kulkusyvyys (2.2mm teksti)
    (16503, NONE),
    // Kulkusyvyys (1.8mm teksti)
    (16504, NONE),
    // Alikulkukorkeus
    (16508, NONE),
    // Laivaväylä
    (16511, Rule::Tags(&[("seamark:type", "recommended_track")])),
    // Venereitti
    (16512, Rule::Tags(&[("seamark:type", "recommended_track")])),
    // Ankkuripaikka
    (16600, Rule::Tags(&[("seamark:type", "anchorage")])),
    // Hylyn syvyys
    (16703, Rule::Derived(text::depth)),
    // Hylky, pinnalla
    (
        16712,
        Rule::Tags(&[
            ("historic", "wreck"),
            ("seamark:type", "wreck"),
            ("seamark:category", "hull_visible"),
        ]),
    ),
    // Hylky, syvyys tuntematon
    (16721, Rule::Tags(&[("historic", "wreck"), ("seamark:type", "wreck")])),
    // Hylky, syvyys tunnettu
    (16722, Rule::Tags(&[("historic", "wreck"), ("seamark:type", "wreck")])),
    // Tunnelin aukko
    (16800, NONE),

    // --- Réseaux: énergie, canalisations
    // Muuntaja
    (22100, Rule::Tags(&[("power", "transformer")])),
    // Muuntoasema
    (22200, Rule::Tags(&[("power", "station")])),
    // Sähkölinja (tallennettu alaluokkiin)
    (22300, NONE),
    // Sähkölinja, suurjännite
    (22311, Rule::Tags(&[("power", "line")])),
    // Sähkölinja, jakelujännite
    (22312, Rule::Tags(&[("power", "minor_line")])),
    // Sähkölinjan symboli (tallennettu alaluokkiin)
    (22391, NONE),
    // Suurjännitelinjan pylväs
    (22392, Rule::Tags(&[("power", "tower")])),
    // Suurjännitelinjan symboli
    (22394, NONE),
    // Jakelujännitelinjan symboli
    (22395, NONE),
    // Putkijohto, kaasu
    (26111, Rule::Tags(&[("man_made", "pipeline"), ("type", "gas")])),
    // Putkijohto, kiinteä aine
    (26112, Rule::Tags(&[("man_made", "pipeline"), ("type", "solid")])),
    // Putkijohto, lämpö
    (26113, Rule::Tags(&[("man_made", "pipeline"), ("type", "heat")])),
    // Putkijohto, vesi
    (26114, Rule::Tags(&[("man_made", "pipeline"), ("type", "water")])),
    // Putkijohto, vesihöyry
    (26115, Rule::Tags(&[("man_made", "pipeline"), ("type", "steam")])),
    // Putkijohto, viemäri
    (26116, Rule::Tags(&[("man_made", "pipeline"), ("type", "sewage")])),
    // Putkijohto, öljy
    (26117, Rule::Tags(&[("man_made", "pipeline"), ("type", "oil")])),
    // Putkijohdon symboli, kaasu
    (26191, NONE),
    // Putkijohdon symboli, kiinteä aine
    (26192, NONE),
    // Putkijohdon symboli, lämpö
    (26193, NONE),
    // Putkijohdon symboli, vesi
    (26194, NONE),
    // Putkijohdon symboli, vesihöyry
    (26195, NONE),
    // Putkijohdon symboli, viemäri
    (26196, NONE),
    // Putkijohdon symboli, öljy
    (26197, NONE),
    // Vedenottamo
    (26200, Rule::Tags(&[("man_made", "water_works")])),
    // Vedenottamon selite
    (26202, NONE),

    // --- Maasto: occupation du sol, hydrographie
    // Keinotekoinen rantaviiva
    (30100, NONE),
    // Maasto/2 yksikäsitteinen reunaviiva
    (30211, NONE),
    // Maasto/2 epämääräinen reunaviiva
    (30212, NONE),
    // Pato
    (30300, Rule::Tags(&[("waterway", "dam")])),
    // Sulkuportti
    (30400, Rule::Tags(&[("waterway", "lock_gate")])),
    // Vesialueiden välinen reuna
    (30900, NONE),
    // Suojelukohteet tekninen viiva
    (30999, NONE),
    // Maa-aineksenottoalueen nimi
    (32101, NONE),
    // Maa-aineksenottoalueen selite
    (32102, NONE),
    // Maa-aineksenottoalue, karkea kivennäisaines
    (32111, Rule::Tags(&[("landuse", "quarry"), ("resource", "aggregate")])),
    // Maa-aineksenottoalue, hieno kivennäisaines
    (32112, Rule::Tags(&[("landuse", "quarry"), ("resource", "clay")])),
    // Maa-aineksenottoalue, eloperäinen aines
    (32113, Rule::Tags(&[("landuse", "quarry"), ("resource", "organic")])),
    // Eloperäinen ainessymboli
    (32191, NONE),
    // Hieno kivennäisainessymboli
    (32192, NONE),
    // Hautausmaa
    (32200, Rule::Tags(&[("landuse", "cemetery")])),
    // Hautausmaan nimi
    (32201, NONE),
    // Hautausmaan selite
    (32202, NONE),
    // Hautausmaan symboli
    (32291, NONE),
    // Kaatopaikka
    (32300, Rule::Tags(&[("landuse", "landfill")])),
    // Kaatopaikan nimi
    (32301, NONE),
    // Kaatopaikan selite
    (32302, NONE),
    // Liikennealueen nimi
    (32401, NONE),
    // Liikennealueen selite
    (32402, Rule::Derived(text::traffic_area_caption)),
    // Lentokentän kiitotie (tallennettu alaluokkiin)
    (32410, NONE),
    // Lentokentän kiitotie, päällystetty
    (32411, Rule::Tags(&[("aeroway", "runway"), ("surface", "paved")])),
    // Lentokentän kiitotie, päällystämätön
    (32412, Rule::Tags(&[("aeroway", "runway"), ("surface", "unpaved")])),
    // Muu lentokenttäalue
    (32413, NONE),
    // Muu lentoliikennealue
    (32414, NONE),
    // Muu lentokenttäalue, päällystetty
    (32415, NONE),
    // Muu lentokenttäalue, päällystämätön
    (32416, NONE),
    // Muu lentoliikennealue, päällystetty
    (32417, NONE),
    // Muu lentoliikennealue, päällystämätön
    (32418, NONE),
    // Autoliikennealue
    (32421, Rule::Tags(&[("amenity", "parking")])),
    // Louhos
    (32500, Rule::Tags(&[("landuse", "quarry")])),
    // Louhoksen nimi
    (32501, NONE),
    // Louhoksen selite
    (32502, NONE),
    // Louhoksen symboli
    (32591, NONE),
    // Maatalousmaan selite
    (32602, NONE),
    // Pelto
    (32611, Rule::Tags(&[("landuse", "farm")])),
    // Puutarha
    (32612, Rule::Tags(&[("landuse", "orchard")])),
    // Havumetsä
    (32710, NONE),
    // Lehtimetsä
    (32713, NONE),
    // Sekametsä
    (32714, NONE),
    // Varvikko
    (32715, NONE),
    // Pensaikko
    (32719, NONE),
    // Metsämaan ojitus
    (32721, NONE),
    // Niitty
    (32800, Rule::Tags(&[("landuse", "meadow")])),
    // Niityn symboli
    (32891, NONE),
    // Puisto
    (32900, Rule::Tags(&[("leisure", "park")])),
    // Puiston nimi
    (32901, NONE),
    // Puiston selite
    (32902, NONE),
    // Täytemaa
    (33000, NONE),
    // Täytemaan nimi
    (33001, NONE),
    // Täytemaan selite
    (33002, NONE),
    // Täytemaan symboli
    (33091, NONE),
    // Urheilu- ja virkistysalue
    (33100, NONE),
    // Urheilu- ja virkistysalueen nimi
    (33101, NONE),
    // Urheilu- ja virkistysalueen selite
    (33102, NONE),
    // Kallio - alue
    (34100, Rule::Tags(&[("natural", "bedrock")])),
    // Harva louhikko
    (34200, NONE),
    // Hietikko
    (34300, Rule::Tags(&[("natural", "sand")])),
    // Jyrkänne
    (34400, Rule::Tags(&[("natural", "cliff")])),
    // Kalliohalkeama
    (34500, NONE),
    // Kivi
    (34600, Rule::Tags(&[("natural", "stone")])),
    // Kiven nimi
    (34601, NONE),
    // Kivikko
    (34700, Rule::Tags(&[("natural", "scree")])),
    // Luiska
    (34800, Rule::Tags(&[("embankment", "yes")])),
    // Merkittävä luontokohde
    (34900, NONE),
    // Merkittävän luontokohteen nimi
    (34901, Rule::Derived(text::natural_feature_name)),
    // Merkittävän luontokohteen selite
    (34902, NONE),
    // Pellon tai niityn nimi
    (35010, Rule::Derived(text::locality_name)),
    // Metsäalueen nimi
    (35020, Rule::Derived(text::locality_name)),
    // Suon nimi
    (35030, Rule::Derived(text::locality_name)),
    // Kohouman nimi
    (35040, Rule::Derived(text::locality_name)),
    // Painanteen nimi
    (35050, Rule::Derived(text::locality_name)),
    // Niemen nimi
    (35060, Rule::Derived(text::locality_name)),
    // Saaren nimi
    (35070, Rule::Derived(text::island_name)),
    // Matalikon nimi
    (35080, NONE),
    // Muu maastonimi
    (35090, Rule::Derived(text::locality_name)),
    // Puu
    (35100, Rule::Tags(&[("natural", "tree")])),
    // Puun nimi
    (35101, NONE),
    // Puun selite
    (35102, NONE),
    // Puurivi
    (35200, Rule::Tags(&[("natural", "tree_row")])),
    // Soistuma
    (35300, NONE),
    // Suo (tallennettu alaluokkiin)
    (35400, NONE),
    // Suo, helppokulkuinen puuton
    (35411, Rule::Tags(&[("natural", "wetland")])),
    // Suo, helppokulkuinen metsää kasvava
    (35412, Rule::Tags(&[("natural", "wetland")])),
    // Suo, vaikeakulkuinen puuton
    (35421, Rule::Tags(&[("natural", "wetland"), ("wetland", "marsh")])),
    // Suo, vaikeakulkuinen metsää kasvava
    (35422, Rule::Tags(&[("natural", "wetland"), ("wetland", "swamp")])),
    // Suojänne
    (35500, NONE),
    // Lähde
    (36100, Rule::Tags(&[("natural", "spring")])),
    // Lähteen nimi
    (36101, NONE),
    // Järvivesi
    (36200, Rule::Tags(&[("natural", "water")])),
    // Vakaveden nimi
    (36201, NONE),
    // Merivesi
    (36211, Rule::Tags(&[("natural", "coastline")])),
    // Vedenpinnan korkeusluku
    (36291, Rule::Derived(text::elevation)),
    // Virtaveden nimi
    (36301, NONE),
    // Virtavesi, alle 2m
    (36311, Rule::Tags(&[("waterway", "stream")])),
    // Virtavesi, 2-5m
    (36312, Rule::Tags(&[("waterway", "river")])),
    // Virtavesialue
    (36313, Rule::Tags(&[("waterway", "riverbank")])),
    // Virtaveden juoksusuunta (tallennettu alaluokkiin)
    (36391, NONE),
    // Kapean virtaveden juoksusuunta
    (36392, NONE),
    // Leveän virtaveden juoksusuunta
    (36393, NONE),
    // Vesikuoppa
    (36400, NONE),
    // Vakaveden osan nimi
    (36410, NONE),
    // Virtaveden osan nimi
    (36420, NONE),
    // Muu vesistökohteen nimi
    (36490, NONE),
    // Muun maastokohteen selite
    (36500, NONE),
    // Kaislikko
    (38100, NONE),
    // Koski
    (38200, Rule::Tags(&[("whitewater:rapid_grade", "unknown")])),
    // Kosken nimi
    (38201, NONE),
    // Maatuva vesialue
    (38300, Rule::Tags(&[("natural", "wetland"), ("wetland", "reedbed")])),
    // Tulva-alue
    (38400, Rule::Tags(&[("natural", "wetland"), ("wetland", "tidalflat")])),
    // Vesikiven nimi
    (38501, NONE),
    // Vesikivi, vedenalainen
    (38511, Rule::Tags(&[("seamark:type", "rock"), ("seamark:rock:water_level", "submerged")])),
    // Vesikivi, pinnassa
    (38512, Rule::Tags(&[("seamark:type", "rock"), ("seamark:rock:water_level", "awash")])),
    // Vesikivi, vedenpäällinen
    (38513, Rule::Tags(&[("seamark:type", "rock"), ("seamark:rock:water_level", "always_dry")])),
    // Vesikivikko
    (
        38600,
        Rule::Tags(&[("seamark:type", "seabed_area"), ("seamark:seabed_area:surface", "stone")]),
    ),
    // Matalikko
    (38700, Rule::Tags(&[("seamark:type", "sea_area"), ("seamark:sea_area:category", "shoal")])),
    // Uittolaite
    (38800, Rule::Tags(&[("seamark:mooring:category", "dolphin"), ("seamark:type", "mooring")])),
    // Varastoalue
    (38900, NONE),
    // Varastoalueen nimi
    (38901, NONE),
    // Varastoalueen selite
    (38902, NONE),
    // Varastoalueen symboli
    (38991, NONE),
    // Uittoränni
    (39000, NONE),
    // Avoin metsämaa
    (39110, NONE),
    // Varvikko
    (39120, Rule::Tags(&[("natural", "scrub")])),
    // Avoin vesijättö
    (39130, Rule::Tags(&[("natural", "wetland"), ("wetland", "wet_meadow")])),
    // Metsän raja
    (39500, NONE),
    // Metsän rajan selite
    (39502, NONE),

    // --- Rakennukset: bâti et constructions
    // Taajaan rakennetun alueen reunaviiva
    (40100, NONE),
    // Taajaan rakennettu alue
    (40200, NONE),
    // Rakennuksen nimi
    (42101, Rule::Derived(text::name)),
    // Rakennuksen selite
    (42102, Rule::Derived(text::building_caption)),
    // Asuinrakennus, ? krs
    (42110, NONE),
    // Asuinrakennus, 1-2 krs
    (42111, NONE),
    // Asuinrakennus, 3-n krs
    (42112, NONE),
    // Liike- tai julkinen rakennus, ? krs
    (42120, NONE),
    // Liike- tai julkinen rakennus, 1-2 krs
    (42121, NONE),
    // Liike- tai julkinen rakennus, 3-n krs
    (42122, NONE),
    // Lomarakennus, ? krs
    (42130, NONE),
    // Lomarakennus, 1-2 krs
    (42131, NONE),
    // Lomarakennus, 3-n krs
    (42132, NONE),
    // Teollinen rakennus, ? krs
    (42140, NONE),
    // Teollinen rakennus, 1-2 krs
    (42141, NONE),
    // Teollinen rakennus, 3-n krs
    (42142, NONE),
    // Kirkollinen rakennus, ? krs
    (42150, NONE),
    // Kirkollinen rakennus, 1-2 krs
    (42151, NONE),
    // Kirkollinen rakennus, 3-n krs
    (42152, NONE),
    // Muu rakennus, ? krs
    (42160, NONE),
    // Muu rakennus, 1-2 krs
    (42161, NONE),
    // Muu rakennus, 3-n krs
    (42162, NONE),
    // Kirkko
    (42170, NONE),
    // Rakennusalueen reunaviiva
    (42200, NONE),
    // Rakennusryhmän nimi
    (42201, Rule::Derived(text::hamlet_name)),
    // Rakennusryhmän selite
    (42202, NONE),
    // Asuinrakennus, ? krs
    (42210, Rule::Tags(&[("building", "residential")])),
    // Asuinrakennus, 1-2 krs
    (42211, Rule::Tags(&[("building", "residential")])),
    // Asuinrakennus, 3-n krs
    (42212, Rule::Tags(&[("building", "residential")])),
    // Liike- tai julkinen rakennus, ? krs
    (42220, Rule::Tags(&[("building", "public")])),
    // Liike- tai julkinen rakennus, 1-2 krs
    (42221, Rule::Tags(&[("building", "public")])),
    // Liike- tai julkinen rakennus, 3-n krs
    (42222, Rule::Tags(&[("building", "public")])),
    // Lomarakennus, ? krs
    (42230, Rule::Tags(&[("building", "yes")])),
    // Lomarakennus, 1-2 krs
    (42231, Rule::Tags(&[("building", "yes")])),
    // Lomarakennus, 3-n krs
    (42232, Rule::Tags(&[("building", "yes")])),
    // Teollinen rakennus, ? krs
    (42240, Rule::Tags(&[("building", "industrial")])),
    // Teollinen rakennus, 1-2 krs
    (42241, Rule::Tags(&[("building", "industrial")])),
    // Teollinen rakennus, 3-n krs
    (42242, Rule::Tags(&[("building", "industrial")])),
    // Kirkollinen rakennus, ? krs
    (42250, Rule::Tags(&[("building", "public")])),
    // Kirkollinen rakennus, 1-2 krs
    (42251, Rule::Tags(&[("building", "public")])),
    // Kirkollinen rakennus, 3-n krs
    (42252, Rule::Tags(&[("building", "public")])),
    // Muu rakennus, ? krs
    (42260, Rule::Tags(&[("building", "yes")])),
    // Muu rakennus, 1-2 krs
    (42261, Rule::Tags(&[("building", "yes")])),
    // Muu rakennus, 3-n krs
    (42262, Rule::Tags(&[("building", "yes")])),
    // Kirkko
    (
        42270,
        Rule::Tags(&[
            ("building", "church"),
            ("amenity", "place_of_worship"),
            ("religion", "christian"),
        ]),
    ),
    // Aallonmurtaja
    (44100, Rule::Tags(&[("man_made", "breakwater")])),
    // Aidan selite
    (44202, NONE),
    // Aita,tekoaines
    (44211, Rule::Tags(&[("barrier", "fence"), ("fixme", "wall?")])),
    // Aita, istutettu
    (44213, Rule::Tags(&[("barrier", "hedge")])),
    // Allas - alue
    (44300, Rule::Tags(&[("landuse", "reservoir")])),
    // Altaan nimi
    (44301, NONE),
    // Altaan selite
    (44302, NONE),
    // Ilmaradan selite
    (44402, NONE),
    // Ilmarata
    (44500, NONE),
    // Ilmaradan kannatinpylväs
    (44591, Rule::Tags(&[("aerialway", "pylon")])),
    // Kellotapuli
    (44600, NONE),
    // Lähestymisvalo
    (44700, Rule::Tags(&[("man_made", "beacon")])),
    // Masto
    (44800, Rule::Tags(&[("man_made", "mast"), ("mast:type", "communication")])),
    // Maston korkeus
    (44803, Rule::Derived(text::tower_height)),
    // Muistomerkki
    (44900, Rule::Tags(&[("historic", "memorial")])),
    // Muistomerkin nimi
    (44901, NONE),
    // Muistomerkin selite
    (44902, NONE),
    // Näkötorni
    (45000, Rule::Tags(&[("man_made", "tower"), ("tower:type", "observation")])),
    // Näkötornin selite
    (45002, NONE),
    // Pistolaituri, alle 5 m
    (45111, Rule::Tags(&[("man_made", "pier")])),
    // Pistolaituri, vähintään 5 m
    (45112, Rule::Tags(&[("man_made", "pier"), ("area", "yes")])),
    // Portti
    (45200, Rule::Tags(&[("barrier", "gate")])),
    // Savupiippu
    (45300, Rule::Tags(&[("man_made", "chimney")])),
    // Savupiipun korkeus
    (45303, Rule::Derived(text::height)),
    // Tervahauta
    (45400, Rule::Tags(&[("man_made", "tar_kiln")])),
    // Tervahaudan selite
    (45402, NONE),
    // Tuulimoottori
    (45500, Rule::Tags(&[("power", "generator"), ("power_source", "wind")])),
    // Tuulimoottorin selite
    (45502, NONE),
    // Rakennelma
    (45700, Rule::Tags(&[("man_made", "yes")])),
    // Rakennelman selite
    (45702, NONE),
    // Tulentekopaikka
    (45710, Rule::Tags(&[("tourism", "picnic_site"), ("fireplace", "yes")])),
    // Vesitorni
    (45800, Rule::Tags(&[("man_made", "water_tower")])),
    // Vesitornin selite
    (45802, NONE),
    // Kaupungin nimi
    (48111, NONE),
    // Muun kunnan nimi
    (48112, NONE),
    // Kylän, kaupunginosan tai kulmakunnan nimi
    (48120, NONE),
    // Talon nimi
    (48130, Rule::Derived(text::name)),
    // Muu asutusnimi
    (48190, NONE),

    // --- Korkeussuhteet: relief et bathymétrie
    // Korkeuskäyrä
    (52100, NONE),
    // Korkeuskäyrän korkeusarvo
    (52191, NONE),
    // Korkeuskäyrän viettoviiva
    (52192, NONE),
    // Apukäyrän viettoviiva
    (52193, NONE),
    // Korkeuspiste
    (52210, Rule::Derived(text::elevation)),
    // Syvyyskäyrä
    (54100, NONE),
    // Syvyyskäyrän syvyysarvo
    (54191, NONE),
    // Syvyyskäyrän viettoviiva
    (54192, NONE),
    // Syvyyspiste
    (54210, Rule::Derived(text::depth)),

    // --- Zones réglementées
    // Ampuma-alueen reunaviiva
    (62100, Rule::Tags(&[("landuse", "military"), ("military", "range")])),
    // Sotilasalueen selite
    (62102, NONE),
    // Suoja-alue
    (62200, Rule::Tags(&[("seamark:type", "restricted_area")])),
    // Suoja-alueen selite
    (62202, NONE),

    // --- Suojelukohteet: zones protégées
    // Suojelualueen reunaviiva
    (72000, NONE),
    // Luonnonsuojelualue
    (72200, NONE),
    // Luonnonpuisto
    (
        72201,
        Rule::Tags(&[
            ("boundary", "protected_area"),
            ("protection_title", "luonnonpuisto"),
            ("related_law", "Luonnonsuojelulaki"),
            ("protect_class", "1"),
        ]),
    ),
    // Kansallispuisto
    (72202, Rule::Tags(&[("boundary", "national_park")])),
    // Luonnonmuistomerkin nimi
    (72303, NONE),
    // Luonnonmuistomerkin selite
    (72304, NONE),
    // Rauhoitettu kivi
    (72310, Rule::Tags(&[("natural", "stone")])),
    // Rauhoitettu puu
    (72320, Rule::Tags(&[("natural", "tree")])),
    // Muinaisjäännös
    (
        72330,
        Rule::Tags(&[
            ("historic", "archaeological_site"),
            ("fixme", "castle/fort/memorial/ruins?"),
        ]),
    ),
    // Muu rauhoitettu kohde
    (72340, NONE),
    // Muinaisjäännöksen nimi
    (72403, NONE),
    // Muinaisjäännöksen selite
    (72404, NONE),
    // Rauhoitettu kivi
    (72410, NONE),
    // Rauhoitettu puu
    (72420, NONE),
    // Muu rauhoitettu kohde
    (72440, NONE),
    // Suojametsä
    (72500, NONE),
    // Suojametsän selite
    (72501, NONE),
    // Luonnonpuiston nimi
    (72502, NONE),
    // Kansallispuiston nimi
    (72601, NONE),
    // Kansallispuiston selite
    (72603, NONE),
    // Luonnonpuiston selite
    (72604, NONE),
    // Erämaa-alue
    (72700, NONE),
    // Erämaa-alueen nimi
    (72701, NONE),
    // Erämaa-alueen selite
    (72702, NONE),
    // Retkeilyalue
    (72800, NONE),
    // Retkeilyalueen nimi
    (72801, NONE),
    // Retkeilyalueen selite
    (72802, NONE),
    // Muinaisjäännös
    (
        74330,
        Rule::Tags(&[
            ("historic", "archaeological_site"),
            ("area", "yes"),
            ("fixme", "castle/fort/memorial/ruins?"),
        ]),
    ),

    // --- Hallintorajat: limites administratives
    // Aluemeren ulkoraja
    (82100, Rule::Tags(&[("boundary", "administrative"), ("admin_level", "2")])),
    // Aluemeren ulkorajan selite
    (82102, NONE),
    // Rajavyöhykkeen takaraja
    (82200, NONE),
    // Rajavyöhykkeen takarajan selite
    (82202, NONE),
    // Sisäisten aluevesien ulkoraja
    (82300, NONE),
    // Sisäisten aluevesien ulkorajan selite
    (82302, NONE),
    // Ulko- ja sisäsaariston raja
    (82400, NONE),
    // Ulko- ja sisäsaariston rajan selite
    (82402, NONE),
    // Valtakunnan rajapyykki
    (82500, Rule::Tags(&[("man_made", "cairn")])),
    // Valtakunnan rajapyykin nimi
    (82501, NONE),
    // Valtakunnan raja
    (84111, Rule::Tags(&[("boundary", "administrative"), ("admin_level", "2")])),
    // Aluehallintoviraston toimialueen raja
    (84112, Rule::Tags(&[("boundary", "administrative"), ("admin_level", "4")])),
    // Kunnan raja
    (84113, Rule::Tags(&[("boundary", "administrative"), ("admin_level", "8")])),
    // Käymätön raja
    (84114, Rule::Tags(&[("boundary", "administrative"), ("admin_level", "8")])),
    // Maakunnan raja
    (84115, Rule::Tags(&[("boundary", "administrative"), ("admin_level", "6")])),
    // Kunta
    (
        84200,
        Rule::Tags(&[
            ("type", "boundary"),
            ("boundary", "administrative"),
            ("admin_level", "8"),
            ("ref", "FIXME"),
            ("name", "FIXME"),
            ("place", "FIXME"),
        ]),
    ),
    // Muu kaupunki
    (84302, NONE),
    // Muu kunta
    (84303, NONE),
    // Kunnan hallintorajan selite
    (85100, NONE),

    // --- Points géodésiques et adresses
    // Rajapyykin nimi
    (92401, NONE),
    // Kolmiopiste, I luokka
    (95111, Rule::Derived(survey::survey_point)),
    // Kolmiopiste, II luokka
    (95112, Rule::Derived(survey::survey_point)),
    // Kolmiopiste, III luokka
    (95113, Rule::Derived(survey::survey_point)),
    // Korkeuskiintopiste, I luokka
    (95211, Rule::Derived(survey::survey_point)),
    // Korkeuskiintopiste, II luokka
    (95212, Rule::Derived(survey::survey_point)),
    // Korkeuskiintopiste, III luokka
    (95213, Rule::Derived(survey::survey_point)),
    // Korkeuskiintopiste, IV luokka
    (95214, Rule::Derived(survey::survey_point)),
    // Vesiasteikko
    (95300, Rule::Tags(&[("man_made", "monitoring_station"), ("monitoring:river_level", "yes")])),
    // Vesiasteikon selite
    (95302, NONE),
    // Lähiosoite
    (96001, NONE),
    // Kulkupaikka
    (96002, NONE),
    // Pelastuskoodipiste
    (96010, NONE),
];
